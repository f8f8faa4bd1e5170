use super::view_model::{StandardsSelectorViewModel, PLACEHOLDER};
use crate::shared::icons::icon;
use crate::shared::theme::{stripe, YELLOW_FOCUS};
use leptos::prelude::*;

#[component]
pub fn StandardsSelector(vm: StandardsSelectorViewModel) -> impl IntoView {
    view! {
        <div class="standards-select">
            <div class="standards-select__control" on:click=move |_| vm.open_menu()>
                // Chips show the code only
                {move || {
                    vm.selection
                        .with(|s| s.picked().to_vec())
                        .into_iter()
                        .map(|option| {
                            let index = option.index;
                            view! {
                                <span class="standards-select__chip" title=option.label.clone()>
                                    {option.value}
                                    <button
                                        class="standards-select__chip-remove"
                                        aria-label="Remove"
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            ev.stop_propagation();
                                            vm.unpick(index);
                                        }
                                    >
                                        {icon("close")}
                                    </button>
                                </span>
                            }
                        })
                        .collect_view()
                }}
                <input
                    type="text"
                    class="standards-select__input"
                    placeholder=move || {
                        if vm.selection.with(|s| s.picked().is_empty()) { PLACEHOLDER } else { "" }
                    }
                    prop:value=move || vm.query.get()
                    on:input=move |ev| vm.set_query(event_target_value(&ev))
                    on:focus=move |_| vm.open_menu()
                    on:blur=move |_| vm.close_menu()
                    on:keydown=move |ev| match ev.key().as_str() {
                        "ArrowDown" => {
                            ev.prevent_default();
                            vm.move_focus(1);
                        }
                        "ArrowUp" => {
                            ev.prevent_default();
                            vm.move_focus(-1);
                        }
                        "Enter" => {
                            ev.prevent_default();
                            vm.pick_focused();
                        }
                        "Escape" => vm.close_menu(),
                        "Backspace" => vm.remove_last(),
                        _ => {}
                    }
                />
                <span class="standards-select__indicator">{icon("chevron-down")}</span>
            </div>

            <Show when=move || vm.menu_open.get()>
                <div class="standards-select__menu" role="listbox">
                    {move || {
                        let options = vm.visible();
                        if options.is_empty() {
                            let text = if vm.catalog.with(|c| c.is_loading()) {
                                "Loading..."
                            } else {
                                "No options"
                            };
                            return view! { <div class="standards-select__empty">{text}</div> }.into_any();
                        }
                        options
                            .into_iter()
                            .enumerate()
                            .map(|(position, option)| {
                                let code = option.code().to_string();
                                let description = option.description().to_string();
                                let striped = stripe(option.index);
                                view! {
                                    <div
                                        class="standards-select__option"
                                        role="option"
                                        style:background-color=move || {
                                            if vm.focused.get() == Some(position) { YELLOW_FOCUS } else { striped }
                                        }
                                        on:mouseenter=move |_| vm.focused.set(Some(position))
                                        on:mousedown=move |ev| {
                                            // Keep focus in the input so the menu stays open
                                            ev.prevent_default();
                                            vm.pick(option.clone());
                                        }
                                    >
                                        <span class="standards-select__code">{code}</span>
                                        " - "
                                        {description}
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
