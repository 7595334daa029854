use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use crate::components::{ErrorView, LoadingView, Modal, StadiumLayout};
use crate::db::entities::{Game, Ticket};
use crate::seat_map::{BookingState, SeatStatus, SeatingConfig};
use crate::server::{fetch_game_detail, reserve_ticket, GameDetail};
use crate::utils::format::{format_chf, format_kickoff};

#[component]
pub fn GameDetailPage() -> impl IntoView {
    let params = use_params_map();

    let game_id = Memo::new(move |_| {
        params.read()
            .get("id")
            .and_then(|id| id.parse::<i32>().ok())
    });

    let detail = Resource::new(
        move || game_id.get(),
        |id_opt| async move {
            match id_opt {
                Some(id) => fetch_game_detail(id).await,
                None => Ok(None),
            }
        },
    );

    view! {
        <div class="game-detail-page">
            <Suspense fallback=move || view! { <LoadingView message="Loading game..."/> }>
                {move || {
                    detail.get().map(|result| match result {
                        Ok(Some(detail)) => view! { <GameDetailContent detail/> }.into_any(),
                        Ok(None) => view! { <GameNotFound/> }.into_any(),
                        Err(e) => {
                            let message = Signal::derive(move || Some(format!("Failed to load game: {}", e)));
                            view! { <ErrorView message/> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn GameNotFound() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="game-not-found">
            <h1>"Game not found"</h1>
            <button
                class="btn-primary"
                on:click=move |_| navigate("/buy", Default::default())
            >
                "← Back to Games"
            </button>
        </div>
    }
}

#[component]
fn GameDetailContent(detail: GameDetail) -> impl IntoView {
    let navigate = use_navigate();
    let GameDetail { game, pre_booked } = detail;

    let game_id = game.id;
    let tickets = RwSignal::new(game.tickets.clone());
    let booking = RwSignal::new(BookingState::new(&SeatingConfig::with_pre_booked(pre_booked)));
    let game = StoredValue::new(game);

    let selected_ticket = RwSignal::new(None::<Ticket>);
    let show_success = RwSignal::new(false);
    let is_booking = RwSignal::new(false);
    let error_message = RwSignal::new(None::<String>);

    let select_ticket = move |ticket: Ticket| {
        error_message.set(None);
        selected_ticket.set(Some(ticket));
    };

    let buy_ticket = move || {
        let Some(ticket) = selected_ticket.get_untracked() else {
            return;
        };
        is_booking.set(true);
        error_message.set(None);

        spawn_local(async move {
            match reserve_ticket(game_id, ticket.id).await {
                Ok(reservation) => {
                    booking.update(|state| {
                        state.book(reservation.ticket_id);
                    });
                    selected_ticket.set(None);
                    show_success.set(true);
                }
                Err(e) => {
                    error_message.set(Some(format!("Booking failed: {}", e)));
                }
            }
            is_booking.set(false);
        });
    };

    let close_purchase = move || {
        if !is_booking.get_untracked() {
            selected_ticket.set(None);
        }
    };

    view! {
        <div class="game-detail">
            <div class="game-detail__back">
                <button
                    class="btn-ghost"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| navigate("/buy", Default::default())
                    }
                >
                    "← Back to Games"
                </button>
            </div>

            {game.with_value(|game| view! { <GameHeader game=game.clone()/> })}

            <section class="game-detail__layout">
                <h2>"Stadium Layout - Select Your Seat"</h2>
                <StadiumLayout tickets booking on_select=select_ticket/>
            </section>

            <section class="game-detail__tickets">
                <h2>"Available Tickets"</h2>
                <div class="ticket-list">
                    {move || {
                        let selected_id = selected_ticket.get().map(|t| t.id);
                        let state = booking.get();
                        tickets.get()
                            .into_iter()
                            .map(|ticket| {
                                let status = state.status_of(ticket.id);
                                let is_selected = selected_id == Some(ticket.id);
                                view! { <TicketRow ticket status is_selected on_select=select_ticket/> }
                            })
                            .collect_view()
                    }}
                </div>
            </section>

            <Modal
                show=Signal::derive(move || selected_ticket.get().is_some() && !show_success.get())
                title="Confirm Purchase".to_string()
                description="Review your ticket selection before booking"
                on_close=close_purchase
            >
                {move || selected_ticket.get().map(|ticket| {
                    let summary = game.with_value(|game| {
                        (game.title(), format_kickoff(game.date, &game.kickoff), game.stadium.clone())
                    });
                    view! {
                        <div class="purchase-summary">
                            <h3>{summary.0}</h3>
                            <div class="purchase-summary__details">
                                <div>{summary.1}</div>
                                <div>{summary.2}</div>
                                <div>{format!("{} - {}", ticket.section, ticket.location_label())}</div>
                            </div>
                        </div>
                        <div class="purchase-total">
                            <span>"Total:"</span>
                            <span class="purchase-total__amount">{format_chf(ticket.price)}</span>
                        </div>
                    }
                })}
                <ErrorView message=error_message/>
                <div class="modal-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=is_booking
                        on_click=move |_| close_purchase()
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        loading=is_booking
                        disabled=is_booking
                        on_click=move |_| buy_ticket()
                    >
                        {move || if is_booking.get() { "Booking..." } else { "Buy Ticket" }}
                    </Button>
                </div>
            </Modal>

            <Modal
                show=show_success
                title="Ticket Booked Successfully!".to_string()
                description="Your ticket has been reserved. Check your email for booking confirmation and payment instructions."
                on_close=move || show_success.set(false)
            >
                <div class="modal-success-icon">"✓"</div>
                <div class="modal-actions modal-actions--center">
                    <button
                        class="btn-primary"
                        on:click=move |_| {
                            show_success.set(false);
                            navigate("/buy", Default::default());
                        }
                    >
                        "Back to Games"
                    </button>
                </div>
            </Modal>
        </div>
    }
}

#[component]
fn GameHeader(game: Game) -> impl IntoView {
    view! {
        <section class="game-header">
            <div class="game-header__main">
                <h1>{game.title()}</h1>
                <p class="game-header__description">{game.description.clone()}</p>
                <div class="game-header__meta">
                    <div>"📅 " {format_kickoff(game.date, &game.kickoff)}</div>
                    <div>"📍 " {game.stadium.clone()}</div>
                    <div>"👥 " {format!("{} tickets available", game.ticket_count)}</div>
                </div>
            </div>
            <div class="game-header__price">
                <div class="game-header__price-range">{game.price_range.clone()}</div>
                <div class="game-header__price-label">"Price Range"</div>
            </div>
        </section>
    }
}

#[component]
fn TicketRow(
    ticket: Ticket,
    status: SeatStatus,
    is_selected: bool,
    on_select: impl Fn(Ticket) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let available = status.is_available();
    let card_class = match (is_selected, available) {
        (true, _) => "ticket-card ticket-card--selected",
        (false, true) => "ticket-card",
        (false, false) => "ticket-card ticket-card--unavailable",
    };
    let badge_class = if ticket.section == "VIP" {
        "section-badge section-badge--vip"
    } else {
        "section-badge"
    };
    let button_label = match (is_selected, available) {
        (true, _) => "Selected",
        (false, true) => "Select Seat",
        (false, false) => status.legend(),
    };
    let location = ticket.location_label();
    let section = ticket.section.clone();
    let seller = ticket.seller.clone();
    let price = format_chf(ticket.price);

    view! {
        <div class=card_class>
            <div class="ticket-card__info">
                <div class="ticket-card__heading">
                    <span class=badge_class>{section}</span>
                    <span class="ticket-card__location">{location}</span>
                </div>
                <p class="ticket-card__seller">{format!("Sold by: {}", seller)}</p>
            </div>
            <div class="ticket-card__purchase">
                <div class="ticket-card__price">
                    <div class="ticket-card__amount">{price}</div>
                    <div class="ticket-card__fees">"incl. fees"</div>
                </div>
                <button
                    class={if is_selected { "btn-success" } else { "btn-primary" }}
                    disabled={!available}
                    on:click=move |_| {
                        if available {
                            on_select(ticket.clone());
                        }
                    }
                >
                    {button_label}
                </button>
            </div>
        </div>
    }
}
