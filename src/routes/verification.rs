//! Verification code entry form.
//!
//! Owns the six slot values, the per-slot invalid flags, and the focus
//! target. Focus is requested declaratively: handlers record the slot that
//! should own focus and an effect applies it to the matching input element.

use crate::components::{Alert, AlertKind, AppShell, Button, DigitInput, Spinner};
use crate::features::verification::client::{self, VerifyOutcome};
use crate::features::verification::code::{self, CODE_LEN, CodeEntry};
use crate::features::verification::types::VerifyRequest;
use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const PASTE_ERROR: &str = "Pasted code must be 6 digits long";
const VALIDATION_ERROR: &str = "All fields must be filled with valid digits";
const SUBMISSION_ERROR: &str = "Verification Error";

#[component]
pub fn VerificationPage() -> impl IntoView {
    let navigate = use_navigate();
    let entry = RwSignal::new(CodeEntry::default());
    let invalid_flags = RwSignal::new([false; CODE_LEN]);
    let (error, set_error) = signal::<Option<String>>(None);
    // (epoch, slot): the epoch forces the focus effect to rerun even when
    // the same slot is requested twice in a row.
    let (focus_request, set_focus_request) = signal((0_u32, None::<usize>));
    let cell_refs: [NodeRef<Input>; CODE_LEN] = std::array::from_fn(|_| NodeRef::new());

    let request_focus = move |index: usize| {
        set_focus_request.update(|(epoch, slot)| {
            *epoch += 1;
            *slot = Some(index);
        });
    };

    Effect::new(move |_| {
        let (_epoch, Some(index)) = focus_request.get() else {
            return;
        };
        if let Some(input) = cell_refs[index].get() {
            let _ = input.focus();
        }
    });

    let verify_action = Action::new_local(move |code_string: &String| {
        let request = VerifyRequest {
            code: code_string.clone(),
        };
        async move { client::verify_code(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(VerifyOutcome::Verified) => navigate("/success", Default::default()),
                Ok(VerifyOutcome::Unconfirmed) => {}
                Err(_) => set_error.set(Some(SUBMISSION_ERROR.to_string())),
            }
        }
    });

    let on_cell_change = Callback::new(move |(index, slot): (usize, code::Slot)| {
        entry.update(|entry| entry.set_slot(index, slot));
        if slot.is_some() {
            invalid_flags.update(|flags| flags[index] = false);
        }
        request_focus(code::focus_after_change(index, slot.is_some()));
    });

    let on_paste = Callback::new(move |text: String| match code::parse_pasted(&text) {
        Some(slots) => {
            entry.set(CodeEntry::from_slots(slots));
            request_focus(CODE_LEN - 1);
        }
        None => set_error.set(Some(PASTE_ERROR.to_string())),
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let report = code::validate(&entry.get_untracked());
        invalid_flags.set(report.invalid);
        if let Some(first) = report.first_invalid {
            set_error.set(Some(VALIDATION_ERROR.to_string()));
            request_focus(first);
            return;
        }

        verify_action.dispatch(entry.get_untracked().join());
    };

    let cells = (0..CODE_LEN)
        .map(|index| {
            let value = Signal::derive(move || entry.with(|entry| entry.slot_text(index)));
            let invalid = Signal::derive(move || invalid_flags.with(|flags| flags[index]));
            if index == 0 {
                view! {
                    <DigitInput
                        index=index
                        value=value
                        invalid=invalid
                        node_ref=cell_refs[index]
                        on_change=on_cell_change
                        on_paste=on_paste
                    />
                }
                .into_any()
            } else {
                view! {
                    <DigitInput
                        index=index
                        value=value
                        invalid=invalid
                        node_ref=cell_refs[index]
                        on_change=on_cell_change
                    />
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Verification code:"
                </h1>
                <p class="mt-1 text-sm text-gray-600 dark:text-gray-300">
                    "Enter the 6-digit code you received, or paste it into the first field."
                </p>
                <form class="mt-6" on:submit=on_submit>
                    <div class="flex gap-2">{cells}</div>
                    {move || {
                        error
                            .get()
                            .map(|message| {
                                view! {
                                    <div class="mt-4">
                                        <Alert kind=AlertKind::Error message=message />
                                    </div>
                                }
                            })
                    }}
                    <div class="mt-6">
                        <Button button_type="submit">"SUBMIT"</Button>
                    </div>
                    {move || {
                        verify_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                </form>
            </div>
        </AppShell>
    }
}
