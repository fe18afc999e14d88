use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Closes the dialog's owner once thaw has closed it (Esc, mask click)
fn report_close(open: RwSignal<bool>, on_close: Callback<()>) {
    Effect::new(move |prev: Option<bool>| {
        let current = open.get();
        if prev == Some(true) && !current {
            on_close.run(());
        }
        current
    });
}

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let open = RwSignal::new(true);
    report_close(open, on_close);

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || title.get()}</DialogTitle>
                    <DialogContent>
                        <div class="modal-body">{children()}</div>
                    </DialogContent>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

/// Yes/no question before a destructive action
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
    #[prop(optional, into)]
    confirm_label: MaybeProp<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let open = RwSignal::new(true);
    report_close(open, on_cancel);
    let label = move || confirm_label.get().unwrap_or_else(|| "Delete".to_string());

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <p class="confirm__message">{message}</p>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| on_confirm.run(())>
                            {icon("delete")}
                            {label}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
