use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::components::ErrorView;
use crate::db::entities::{ContactCategory, ContactMessage};
use crate::server::submit_contact_message;

#[component]
pub fn ContactPage() -> impl IntoView {
    let reference = RwSignal::new(None::<String>);

    view! {
        {move || match reference.get() {
            Some(reference) => view! { <ContactReceipt reference/> }.into_any(),
            None => view! {
                <div class="contact-page">
                    <section class="page-header">
                        <h1>"Contact Us"</h1>
                        <p>"Have questions? Need help? We're here to assist you with all your Seatwell needs."</p>
                    </section>
                    <ContactChannels/>
                    <ContactForm reference/>
                </div>
            }.into_any(),
        }}
    }
}

#[component]
fn ContactChannels() -> impl IntoView {
    let channels = [
        ("✉️", "Email Support", "support@seatwell.ch", "Response within 24 hours"),
        ("📞", "Phone Support", "+41 44 123 45 67", "Mon-Fri, 9:00-18:00"),
        ("📍", "Office Address", "Bahnhofstrasse 123, 8001 Zurich, Switzerland", "Visit by appointment"),
    ];

    view! {
        <section class="contact-channels">
            {channels
                .into_iter()
                .map(|(icon, title, detail, note)| view! {
                    <div class="feature-card">
                        <div class="feature-card__icon">{icon}</div>
                        <h3>{title}</h3>
                        <p>{detail}</p>
                        <p class="feature-card__note">{note}</p>
                    </div>
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn ContactForm(reference: RwSignal<Option<String>>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error_message = RwSignal::new(None::<String>);

    let submit = move || {
        let contact = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            category: ContactCategory::from_value(&category.get_untracked()),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(e) = contact.validate() {
            error_message.set(Some(e.to_string()));
            return;
        }

        submitting.set(true);
        error_message.set(None);

        spawn_local(async move {
            match submit_contact_message(contact).await {
                Ok(id) => reference.set(Some(id)),
                Err(e) => {
                    leptos::logging::error!("Contact message failed: {}", e);
                    error_message.set(Some(format!("Failed to send message: {}", e)));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <section class="contact-form-section">
            <div class="section-intro">
                <h2>"Send Us a Message"</h2>
                <p>"Fill out the form below and we'll get back to you as soon as possible"</p>
            </div>

            <form class="contact-form card" on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }>
                <div class="form-row">
                    <div class="form-group">
                        <label>"Full Name *"</label>
                        <Input placeholder="Your full name" value=name/>
                    </div>
                    <div class="form-group">
                        <label>"Email Address *"</label>
                        <Input
                            placeholder="your.email@example.com"
                            input_type=InputType::Email
                            value=email
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label>"Category"</label>
                        <select
                            class="form-select"
                            prop:value=move || category.get()
                            on:change=move |ev| category.set(event_target_value(&ev))
                        >
                            <option value="">"Select a category"</option>
                            {ContactCategory::ALL
                                .into_iter()
                                .map(|c| view! { <option value=c.value()>{c.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Subject"</label>
                        <Input placeholder="Brief description of your inquiry" value=subject/>
                    </div>
                </div>

                <div class="form-group">
                    <label>"Message *"</label>
                    <Textarea
                        placeholder="Please provide details about your inquiry..."
                        value=message
                    />
                </div>

                <div class="response-times">
                    <p class="response-times__heading">"Response Times:"</p>
                    <ul>
                        <li>"General inquiries: Within 24 hours"</li>
                        <li>"Technical issues: Within 4-8 hours"</li>
                        <li>"Urgent payment problems: Within 2 hours"</li>
                    </ul>
                </div>

                <ErrorView message=error_message/>

                <Button
                    class="btn-block"
                    button_type=ButtonType::Submit
                    appearance=ButtonAppearance::Primary
                    loading=Signal::from(submitting)
                    disabled=Signal::from(submitting)
                >
                    {move || if submitting.get() { "Sending Message..." } else { "Send Message" }}
                </Button>
            </form>
        </section>
    }
}

#[component]
fn ContactReceipt(reference: String) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="contact-receipt card">
            <div class="modal-success-icon">"✓"</div>
            <h1>"Thank You for Contacting Us!"</h1>
            <p>
                "Your message has been received successfully. Our team will review your inquiry and get back to you within 24 hours."
            </p>
            <div class="contact-receipt__reference">
                <strong>"Reference ID: "</strong>
                {format!("#{}", reference)}
            </div>
            <button class="btn-primary" on:click=move |_| navigate("/", Default::default())>
                "Back to Homepage"
            </button>
        </div>
    }
}
