use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionPalette {
    Blue,
    Red,
    Purple,
    Green,
    Orange,
    Pink,
    /// Any section not listed in [`SectionPalette::for_section`].
    Neutral,
}

impl SectionPalette {
    pub fn for_section(section: &str) -> SectionPalette {
        match section {
            "Tribune A" | "Tribune Principal" | "Haupttribüne" => SectionPalette::Blue,
            "Tribune B" | "Tribune Latéral" | "Gegentribüne" => SectionPalette::Red,
            "Tribune C" => SectionPalette::Purple,
            "Tribune Nord" => SectionPalette::Green,
            "Tribune Sud" => SectionPalette::Orange,
            "Tribune Ovest" => SectionPalette::Pink,
            _ => SectionPalette::Neutral,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SectionPalette::Blue => "stand stand--blue",
            SectionPalette::Red => "stand stand--red",
            SectionPalette::Purple => "stand stand--purple",
            SectionPalette::Green => "stand stand--green",
            SectionPalette::Orange => "stand stand--orange",
            SectionPalette::Pink => "stand stand--pink",
            SectionPalette::Neutral => "stand stand--neutral",
        }
    }
}
