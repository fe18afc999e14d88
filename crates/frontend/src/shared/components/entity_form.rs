use contracts::shared::{FieldKind, FieldSchema, FieldSpec};
use leptos::prelude::*;
use thaw::*;

use crate::shared::editing::EditorViewModel;

/// Inputs for every field of a schema, bound to an editor's draft
#[component]
pub fn EntityForm(vm: EditorViewModel, schema: FieldSchema) -> impl IntoView {
    schema
        .iter()
        .cloned()
        .map(|spec| view! { <FieldInput vm=vm spec=spec /> })
        .collect_view()
}

/// Thaw-friendly copy of one draft field; edits flow back through the view model
fn text_model(vm: EditorViewModel, name: &'static str) -> RwSignal<String> {
    let model = RwSignal::new(vm.state.with_untracked(|s| s.text(name)));

    // draft -> widget
    Effect::new(move |_| {
        let current = vm.state.with(|s| s.text(name));
        if model.with_untracked(|value| *value != current) {
            model.set(current);
        }
    });

    // widget -> draft
    Effect::new(move |prev: Option<String>| {
        let value = model.get();
        if prev.is_some() && vm.state.with_untracked(|s| s.text(name) != value) {
            vm.set_text(name, value.clone());
        }
        value
    });

    model
}

fn flag_model(vm: EditorViewModel, name: &'static str) -> RwSignal<bool> {
    let model = RwSignal::new(vm.state.with_untracked(|s| s.flag(name)));

    Effect::new(move |_| {
        let current = vm.state.with(|s| s.flag(name));
        if model.get_untracked() != current {
            model.set(current);
        }
    });

    Effect::new(move |prev: Option<bool>| {
        let value = model.get();
        if prev.is_some() && vm.state.with_untracked(|s| s.flag(name)) != value {
            vm.set_flag(name, value);
        }
        value
    });

    model
}

#[component]
fn FieldInput(vm: EditorViewModel, spec: FieldSpec) -> impl IntoView {
    let name = spec.name;
    let disabled = Signal::derive(move || vm.state.with(|s| !s.editable || s.is_saving()));
    let error = move || vm.state.with(|s| s.error_for(name).map(ToString::to_string));
    let required_hint = if spec.required { " *" } else { "" };
    let placeholder = spec.placeholder.to_string();

    let control = match spec.kind {
        FieldKind::Flag => {
            let checked = flag_model(vm, name);
            return view! {
                <div class="form__group form__group--flag">
                    <Checkbox
                        checked=checked
                        label=spec.label.to_string()
                        attr:disabled=move || disabled.get()
                    />
                </div>
            }
            .into_any();
        }
        FieldKind::LongText => {
            let value = text_model(vm, name);
            view! {
                <Textarea value=value placeholder=placeholder disabled=disabled attr:rows=6 />
            }
            .into_any()
        }
        FieldKind::Text | FieldKind::Date | FieldKind::Email => {
            let value = text_model(vm, name);
            let input_type = match spec.kind {
                FieldKind::Date => InputType::Date,
                FieldKind::Email => InputType::Email,
                _ => InputType::Text,
            };
            view! {
                <Input value=value placeholder=placeholder input_type=input_type disabled=disabled />
            }
            .into_any()
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label">
                {spec.label}
                {required_hint}
            </label>
            {control}
            {move || error().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
    .into_any()
}
