use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::components::{ErrorView, LoadingView, Modal, SuccessView};
use crate::db::entities::{BankDetails, ClubGame, SellerListing};
use crate::server::{fetch_club_games, submit_listing, verify_season_ticket};
use crate::utils::auth::credentials_entered;
use crate::utils::format::{format_kickoff, pluralize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SellStep {
    Login,
    SelectGames,
    Confirmation,
}

/// Adds the game if it is not selected yet, otherwise removes it.
fn toggle_game(selected: &mut Vec<i32>, game_id: i32) {
    if let Some(pos) = selected.iter().position(|id| *id == game_id) {
        selected.remove(pos);
    } else {
        selected.push(game_id);
    }
}

fn confirmation_text(count: usize) -> String {
    let verb = if count == 1 { "has" } else { "have" };
    format!(
        "Your {} {} been submitted for admin approval. You'll receive email notifications when they're approved and when they sell.",
        pluralize(count, "ticket"),
        verb
    )
}

#[component]
pub fn SellPage() -> impl IntoView {
    let step = RwSignal::new(SellStep::Login);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let selected_games = RwSignal::new(Vec::<i32>::new());
    let listed_count = RwSignal::new(0usize);
    let show_access_denied = RwSignal::new(false);

    let reset = move || {
        selected_games.set(Vec::new());
        email.set(String::new());
        password.set(String::new());
        step.set(SellStep::Login);
    };

    view! {
        <div class="sell-page">
            <section class="page-header">
                <h1>"Sell Your Tickets"</h1>
                <p>"Turn your unused season tickets into cash. Safe, secure, and officially approved."</p>
            </section>

            <section class="sell-content">
                {move || match step.get() {
                    SellStep::Login => view! {
                        <LoginStep email password step show_access_denied/>
                    }.into_any(),
                    SellStep::SelectGames => view! {
                        <SelectGamesStep email selected_games listed_count step/>
                    }.into_any(),
                    SellStep::Confirmation => view! {
                        <ConfirmationStep listed_count on_list_more=reset/>
                    }.into_any(),
                }}
            </section>

            <Modal
                show=show_access_denied
                title="Access Denied".to_string()
                description="You do not own a seasonal ticket for this club. Only verified season ticket holders can sell tickets on Seatwell."
                on_close=move || show_access_denied.set(false)
            >
                <div class="access-denied">
                    <p class="access-denied__heading">"To sell tickets, you need:"</p>
                    <ul>
                        <li>"Valid season ticket membership"</li>
                        <li>"Club-registered email address"</li>
                        <li>"Account in good standing"</li>
                    </ul>
                </div>
                <div class="modal-actions modal-actions--center">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_access_denied.set(false)
                    >
                        "Try Again"
                    </Button>
                </div>
            </Modal>
        </div>
    }
}

#[component]
fn LoginStep(
    email: RwSignal<String>,
    password: RwSignal<String>,
    step: RwSignal<SellStep>,
    show_access_denied: RwSignal<bool>,
) -> impl IntoView {
    let loading = RwSignal::new(false);
    let error_message = RwSignal::new(None::<String>);

    let is_button_disabled =
        Memo::new(move |_| loading.get() || !credentials_entered(&email.get(), &password.get()));

    let verify = move || {
        if is_button_disabled.get_untracked() {
            return;
        }
        loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match verify_season_ticket(email.get_untracked(), password.get_untracked()).await {
                Ok(true) => step.set(SellStep::SelectGames),
                Ok(false) => show_access_denied.set(true),
                Err(e) => {
                    leptos::logging::error!("Season ticket verification failed: {}", e);
                    error_message.set(Some(format!("Verification failed: {}", e)));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="sell-login card">
            <div class="card__header">
                <div class="card__icon">"🛡️"</div>
                <h2>"Club Member Login"</h2>
                <p>"Login with your club credentials to verify your season ticket"</p>
            </div>

            <form on:submit=move |ev| {
                ev.prevent_default();
                verify();
            }>
                <div class="form-group">
                    <label>"Club Email"</label>
                    <Input
                        placeholder="member@fczurich.ch"
                        input_type=InputType::Email
                        value=email
                    />
                </div>
                <div class="form-group">
                    <label>"Password"</label>
                    <Input
                        placeholder="Enter your password"
                        input_type=InputType::Password
                        value=password
                    />
                </div>

                <div class="demo-credentials">
                    <strong>"Demo credentials:"</strong>
                    <div>"Email: member@fczurich.ch"</div>
                    <div>"Password: any password"</div>
                </div>

                <ErrorView message=error_message/>

                <Button
                    class="btn-block"
                    button_type=ButtonType::Submit
                    appearance=ButtonAppearance::Primary
                    loading=Signal::from(loading)
                    disabled=Signal::from(is_button_disabled)
                >
                    {move || if loading.get() { "Verifying..." } else { "Verify Season Ticket" }}
                </Button>
            </form>
        </div>
    }
}

#[component]
fn SelectGamesStep(
    email: RwSignal<String>,
    selected_games: RwSignal<Vec<i32>>,
    listed_count: RwSignal<usize>,
    step: RwSignal<SellStep>,
) -> impl IntoView {
    let iban = RwSignal::new(String::new());
    let account_holder = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error_message = RwSignal::new(None::<String>);
    let welcome = RwSignal::new(Some(
        "Access granted. Welcome back, season ticket holder!".to_string(),
    ));

    let club_games = Resource::new(|| (), |_| async move { fetch_club_games().await });

    let submit = move |_: leptos::ev::MouseEvent| {
        let listing = SellerListing {
            email: email.get_untracked(),
            game_ids: selected_games.get_untracked(),
            bank: BankDetails {
                iban: iban.get_untracked(),
                account_holder: account_holder.get_untracked(),
                address: address.get_untracked(),
            },
        };
        if let Err(e) = listing.validate() {
            error_message.set(Some(e.to_string()));
            return;
        }

        submitting.set(true);
        error_message.set(None);

        spawn_local(async move {
            match submit_listing(listing).await {
                Ok(count) => {
                    listed_count.set(count);
                    step.set(SellStep::Confirmation);
                }
                Err(e) => {
                    leptos::logging::error!("Listing submission failed: {}", e);
                    error_message.set(Some(format!("Submission failed: {}", e)));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="sell-games">
            <SuccessView message=welcome/>

            <div class="sell-games__intro">
                <h2>"Select Games to Sell"</h2>
                <p>"Choose which games you can't attend and want to resell"</p>
            </div>

            <Suspense fallback=move || view! { <LoadingView message="Loading club games..."/> }>
                {move || {
                    club_games.get().map(|result| match result {
                        Ok(games) => view! {
                            <div class="club-game-list">
                                {games
                                    .into_iter()
                                    .map(|game| view! { <ClubGameRow game selected_games/> })
                                    .collect_view()}
                            </div>
                        }.into_any(),
                        Err(e) => {
                            let message = Signal::derive(move || Some(format!("Failed to load games: {}", e)));
                            view! { <ErrorView message/> }.into_any()
                        }
                    })
                }}
            </Suspense>

            <div class="bank-details card">
                <h3>"Banking Information"</h3>
                <p>"Where should we send your payment when tickets sell?"</p>
                <div class="form-row">
                    <div class="form-group">
                        <label>"IBAN"</label>
                        <Input placeholder="CH93 0076 2011 6238 5295 7" value=iban/>
                    </div>
                    <div class="form-group">
                        <label>"Account Holder Name"</label>
                        <Input placeholder="Max Mustermann" value=account_holder/>
                    </div>
                </div>
                <div class="form-group">
                    <label>"Address"</label>
                    <Input placeholder="Musterstrasse 123, 8001 Zurich" value=address/>
                </div>
            </div>

            <ErrorView message=error_message/>

            <div class="sell-games__footer">
                <div class="sell-games__count">
                    {move || format!("{} selected", pluralize(selected_games.with(|ids| ids.len()), "game"))}
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    loading=Signal::from(submitting)
                    disabled=Signal::derive(move || {
                        submitting.get() || selected_games.with(|ids| ids.is_empty())
                    })
                    on_click=submit
                >
                    {move || if submitting.get() { "Submitting..." } else { "List Tickets for Sale" }}
                </Button>
            </div>
        </div>
    }
}

#[component]
fn ClubGameRow(game: ClubGame, selected_games: RwSignal<Vec<i32>>) -> impl IntoView {
    let game_id = game.id;
    let checkbox_id = format!("game-{}", game_id);
    let is_checked = move || selected_games.with(|ids| ids.contains(&game_id));

    view! {
        <label class="club-game" for=checkbox_id.clone()>
            <input
                type="checkbox"
                id=checkbox_id.clone()
                prop:checked=is_checked
                on:change=move |_| selected_games.update(|ids| toggle_game(ids, game_id))
            />
            <div class="club-game__info">
                <h3>{format!("{} vs {}", game.home_team, game.away_team)}</h3>
                <span>"📅 " {format_kickoff(game.date, &game.kickoff)}</span>
            </div>
            <div class="club-game__value">
                <div class="club-game__value-label">"Est. Value"</div>
                <div class="club-game__value-amount">"CHF 65-85"</div>
            </div>
        </label>
    }
}

#[component]
fn ConfirmationStep(
    listed_count: RwSignal<usize>,
    on_list_more: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="sell-confirmation card">
            <div class="modal-success-icon">"✓"</div>
            <h2>"Tickets Listed Successfully!"</h2>
            <p>{move || confirmation_text(listed_count.get())}</p>

            <div class="next-steps">
                <h3>"What happens next?"</h3>
                <ul>
                    <li>"Admin will review and approve your listings within 24 hours"</li>
                    <li>"Approved tickets will appear on the marketplace"</li>
                    <li>"You'll get paid within 48 hours of each sale"</li>
                    <li>"Seatwell takes a 5% service fee from each sale"</li>
                </ul>
            </div>

            <div class="modal-actions modal-actions--center">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_list_more()>
                    "List More Tickets"
                </Button>
                <button class="btn-primary" on:click=move |_| navigate("/", Default::default())>
                    "Back to Homepage"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_a_game_twice_deselects_it() {
        let mut selected = vec![1, 3];
        toggle_game(&mut selected, 2);
        assert_eq!(selected, vec![1, 3, 2]);

        toggle_game(&mut selected, 3);
        assert_eq!(selected, vec![1, 2]);

        toggle_game(&mut selected, 3);
        assert_eq!(selected, vec![1, 2, 3]);
    }

    #[test]
    fn confirmation_text_agrees_with_count() {
        assert!(confirmation_text(1).starts_with("Your 1 ticket has been"));
        assert!(confirmation_text(3).starts_with("Your 3 tickets have been"));
    }
}
