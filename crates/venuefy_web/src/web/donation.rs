use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use venuefy::config::SiteConfig;
use venuefy::donation::DonationFlow;
use venuefy::stk::{StkGateway, StkOutcome};

use super::dom;
use super::stk_fetch::FetchGateway;
use crate::ui_model::{ids, preset_class, preset_data_amount, preset_label, ModalView};

/// Renders the modal into `#coffee-modal-root`. Pages without the root or the
/// opener button simply have no donation modal.
pub(super) fn mount_donation_modal(config: &SiteConfig) -> Result<(), String> {
    let Some(root) = dom::by_id(ids::COFFEE_MODAL_ROOT) else {
        return Ok(());
    };
    if dom::by_id(ids::BUY_COFFEE_BTN).is_none() {
        return Ok(());
    }
    let root: web_sys::HtmlElement = root
        .dyn_into()
        .map_err(|_| "modal root is not an HtmlElement")?;

    let config = config.clone();
    mount_to(root, move || view! { <DonationModal config=config /> }).forget();
    Ok(())
}

#[component]
fn DonationModal(config: SiteConfig) -> impl IntoView {
    let flow = RwSignal::new(config.donation_flow());
    let endpoint = config.stk_endpoint.clone();

    if let Some(opener) = dom::by_id(ids::BUY_COFFEE_BTN) {
        if let Err(e) = dom::listen(&opener, "click", move |_| flow.update(DonationFlow::open)) {
            dom::warn(&e);
        }
    }

    Effect::new(move |_| {
        let locked = flow.with(DonationFlow::scroll_locked);
        dom::set_body_overflow(if locked { "hidden" } else { "" });
    });

    let modal = Memo::new(move |_| flow.with(ModalView::project));
    let close = move || flow.update(DonationFlow::close);

    let submit = move || {
        let submission = match flow.try_update(DonationFlow::submit) {
            Some(Ok(s)) => s,
            Some(Err(e)) => {
                if !e.is_user_facing() {
                    dom::warn(&format!("donation: {e}"));
                }
                return;
            }
            None => return,
        };
        let gateway = FetchGateway::new(endpoint.clone());
        spawn_local(async move {
            let outcome = gateway.initiate(submission.request).await;
            if let StkOutcome::Transport { detail } = &outcome {
                dom::warn(&format!("donation: {detail}"));
            }
            let Some(Some(auto)) = flow.try_update(|f| f.resolve(submission.session, outcome))
            else {
                return;
            };
            let scheduled = dom::set_timeout(auto.after, move || {
                flow.try_update(|f| f.auto_close(auto.session));
            });
            if let Err(e) = scheduled {
                dom::warn(&format!("donation: {e}"));
            }
        });
    };

    let presets = config
        .preset_amounts
        .iter()
        .copied()
        .enumerate()
        .map(|(i, amount)| {
            view! {
                <button
                    type="button"
                    data-amount=preset_data_amount(amount)
                    class=move || flow.with(|f| preset_class(f, i))
                    on:click=move |_| flow.update(|f| f.select_preset(i))
                >
                    {preset_label(amount)}
                </button>
            }
        })
        .collect_view();

    view! {
        <div
            id=ids::COFFEE_MODAL
            class=move || modal.get().modal_class
            data-status=move || modal.get().status_attr
            role="dialog"
            aria-modal="true"
        >
            <div class="modal-overlay" on:click=move |_| close()></div>
            <div class="modal-content">
                <button
                    id=ids::CLOSE_MODAL
                    type="button"
                    class="modal-close"
                    title="Close"
                    on:click=move |_| close()
                >
                    "×"
                </button>
                <h3 class="modal-title">"Buy me a coffee"</h3>

                <label class="modal-label" for=ids::PHONE_INPUT>"M-Pesa number"</label>
                <input
                    id=ids::PHONE_INPUT
                    class="modal-input"
                    type="tel"
                    placeholder="07XX XXX XXX"
                    prop:value=move || flow.with(|f| f.phone().to_string())
                    on:input=move |ev| flow.update(|f| f.set_phone(event_target_value(&ev)))
                />

                <div class="preset-row">{presets}</div>
                <input
                    id=ids::CUSTOM_AMOUNT
                    class="modal-input"
                    type="number"
                    min="1"
                    placeholder="Custom amount (KES)"
                    prop:value=move || flow.with(|f| f.amount().custom_text().to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        flow.update(|f| f.enter_custom_amount(&text));
                    }
                />

                <button
                    id=ids::SEND_STK_BTN
                    type="button"
                    class="btn btn-primary"
                    prop:disabled=move || modal.get().submit_disabled
                    on:click=move |_| submit()
                >
                    "Send STK Push"
                </button>

                <div id=ids::STK_STATUS class=move || modal.get().status_class>
                    <span class=move || modal.get().spinner_class></span>
                    <p class=move || modal.get().text_class>{move || modal.get().text}</p>
                </div>
            </div>
        </div>
    }
}
