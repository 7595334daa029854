use leptos::prelude::*;

use crate::db::entities::Ticket;
use crate::seat_map::{
    build_seat_grid, select_seat, BookingState, RowLine, SeatCell, SeatStatus, SectionBlock,
};

/// Seat map for one game. Seated sections are drawn as stands on either side
/// of the pitch, standing areas below. Only available seats call `on_select`.
#[component]
pub fn StadiumLayout(
    #[prop(into)] tickets: Signal<Vec<Ticket>>,
    #[prop(into)] booking: Signal<BookingState>,
    on_select: impl Fn(Ticket) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let grid = Memo::new(move |_| booking.with(|booking| tickets.with(|t| build_seat_grid(t, booking))));

    view! {
        <div class="stadium">
            <div class="stadium__field">
                {move || {
                    let grid = grid.get();
                    let (left, right) = grid.stands();
                    let render_side = |side: Vec<&SectionBlock>| {
                        side.into_iter()
                            .map(|section| view! { <StandSection section=section.clone() on_select/> })
                            .collect_view()
                    };

                    view! {
                        <div class="stadium__side">{render_side(left)}</div>
                        <div class="stadium__pitch">
                            <div class="stadium__pitch-label">"PITCH"</div>
                            <div class="stadium__pitch-surface">
                                <span>"Playing Field"</span>
                            </div>
                        </div>
                        <div class="stadium__side">{render_side(right)}</div>
                    }
                }}
            </div>

            {move || {
                let grid = grid.get();
                let standing: Vec<SectionBlock> = grid.standing_sections().cloned().collect();
                (!standing.is_empty()).then(|| view! {
                    <div class="stadium__standing">
                        <h3>"Standing Areas"</h3>
                        {standing
                            .into_iter()
                            .map(|section| view! { <StandingSection section on_select/> })
                            .collect_view()}
                    </div>
                })
            }}

            <div class="stadium__legend">
                {[SeatStatus::Available, SeatStatus::UnavailablePresold, SeatStatus::UnavailableBooked]
                    .into_iter()
                    .map(|status| view! {
                        <div class="stadium__legend-item">
                            <span class=format!("{} seat--swatch", status.css_class())></span>
                            <span>{status.legend()}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn StandSection(
    section: SectionBlock,
    on_select: impl Fn(Ticket) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let available = section.seated_available_count();
    let SectionBlock { name, palette, rows, .. } = section;

    view! {
        <div class=palette.css_class()>
            <div class="stand__title">
                <span class="stand__badge">{name}</span>
            </div>
            <div class="stand__rows">
                {rows.into_iter().map(|row| view! { <SeatRow row on_select/> }).collect_view()}
            </div>
            <div class="stand__count">{format!("{} available", available)}</div>
        </div>
    }
}

#[component]
fn StandingSection(
    section: SectionBlock,
    on_select: impl Fn(Ticket) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let available = section.standing_available_count();
    let SectionBlock { name, palette, standing, .. } = section;

    view! {
        <div class=format!("{} stand--standing", palette.css_class())>
            <div class="stand__title">
                <span class="stand__badge">{name}</span>
            </div>
            <div class="stand__rows">
                {standing
                    .into_iter()
                    .map(|row| {
                        let RowLine { label, seats } = row;
                        view! {
                            <div class="stand__row">
                                <div class="stand__row-label stand__row-label--wide">{label}</div>
                                <div class="stand__seats">
                                    {seats
                                        .into_iter()
                                        .map(|cell| view! { <SeatButton cell on_select wide=true/> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="stand__count">{format!("{} available", available)}</div>
        </div>
    }
}

#[component]
fn SeatRow(row: RowLine, on_select: impl Fn(Ticket) + 'static + Copy + Send + Sync) -> impl IntoView {
    let RowLine { label, seats } = row;

    view! {
        <div class="stand__row">
            <div class="stand__row-label">{format!("R{}", label)}</div>
            <div class="stand__seats">
                {seats.into_iter().map(|cell| view! { <SeatButton cell on_select/> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SeatButton(
    cell: SeatCell,
    on_select: impl Fn(Ticket) + 'static + Copy + Send + Sync,
    #[prop(optional)] wide: bool,
) -> impl IntoView {
    let class = if wide {
        format!("{} seat--wide", cell.status.css_class())
    } else {
        cell.status.css_class().to_string()
    };
    let title = cell.title();
    let label = cell.ticket.seat.clone();
    let disabled = !cell.status.is_available();

    view! {
        <button
            type="button"
            class=class
            title=title
            disabled=disabled
            on:click=move |_| {
                select_seat(&cell, |ticket| on_select(ticket.clone()));
            }
        >
            {label}
        </button>
    }
}
