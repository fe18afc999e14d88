use leptos::prelude::*;
use thaw::*;

use crate::shared::editing::{EditorViewModel, NoticeKind};
use crate::shared::icons::icon;

/// The one visible outcome message of an editor
#[component]
pub fn NoticeBanner(vm: EditorViewModel) -> impl IntoView {
    let notice = move || vm.state.with(|s| s.notice.clone());

    view! {
        {move || notice().map(|notice| {
            let intent = match notice.kind {
                NoticeKind::Success => MessageBarIntent::Success,
                NoticeKind::Error => MessageBarIntent::Error,
            };
            view! {
                <div class="notice" role="status">
                    <MessageBar intent=intent>
                        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                            <span class="notice__message">{notice.message}</span>
                            <Button
                                appearance=ButtonAppearance::Transparent
                                size=ButtonSize::Small
                                on_click=move |_| vm.dismiss_notice()
                                attr:title="Dismiss"
                            >
                                {icon("x")}
                            </Button>
                        </Flex>
                    </MessageBar>
                </div>
            }
        })}
    }
}

/// Shown instead of a form whose data could not be loaded
#[component]
pub fn LoadGate(vm: EditorViewModel, children: ChildrenFn) -> impl IntoView {
    let loading = move || vm.state.with(|s| s.is_loading());
    let failed = move || vm.state.with(|s| !s.is_loading() && !s.editable);

    view! {
        <Show
            when=move || !loading() && !failed()
            fallback=move || {
                if loading() {
                    view! {
                        <div class="page__placeholder">
                            <Flex align=FlexAlign::Center>
                                <Spinner />
                                <span>"Loading..."</span>
                            </Flex>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="page__placeholder">
                            <p>"The data could not be loaded."</p>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.load()>
                                {icon("refresh")}
                                " Retry"
                            </Button>
                        </div>
                    }.into_any()
                }
            }
        >
            {children()}
        </Show>
    }
}
