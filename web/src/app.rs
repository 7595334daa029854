use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::views::admin::AdminPage;
use crate::views::buy::BuyPage;
use crate::views::contact::ContactPage;
use crate::views::game_detail::GameDetailPage;
use crate::views::home::HomePage;
use crate::views::not_found::NotFoundPage;
use crate::views::sell::SellPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/seatwell.css"/>

        <Title text="Seatwell"/>

        <ConfigProvider>
            <Router>
                <Navbar/>
                <main class="page">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("buy") view=BuyPage/>
                        <Route
                            path=(StaticSegment("buy"), StaticSegment("game"), ParamSegment("id"))
                            view=GameDetailPage
                        />
                        <Route path=StaticSegment("sell") view=SellPage/>
                        <Route path=StaticSegment("contact") view=ContactPage/>
                        <Route path=StaticSegment("admin") view=AdminPage/>
                    </Routes>
                </main>
                <Footer/>
            </Router>
        </ConfigProvider>
    }
}
