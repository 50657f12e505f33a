// web_app/components/toast.rs - Notification list
//
// Notices stay until clicked; the list itself caps how many are kept.

use leptos::prelude::*;

use crate::web_app::model::{Notice, NoticeKind};

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "bg-green-50 border-green-200 text-green-800",
        NoticeKind::Error => "bg-red-50 border-red-200 text-red-800",
    }
}

fn notice_icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "✓",
        NoticeKind::Error => "⚠",
    }
}

/// Stack of notices in the top-right corner. Click one to dismiss it.
#[component]
pub fn ToastList(toasts: RwSignal<Vec<Notice>>) -> impl IntoView {
    view! {
        <div class="fixed top-4 right-4 z-[60] flex flex-col gap-2 w-80">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, notice)| {
                        view! {
                            <div
                                class=format!(
                                    "border rounded-lg shadow-sm px-4 py-3 text-sm cursor-pointer flex items-start gap-2 {}",
                                    notice_class(notice.kind),
                                )
                                role="status"
                                on:click=move |_| {
                                    toasts.update(|list| {
                                        if index < list.len() {
                                            list.remove(index);
                                        }
                                    })
                                }
                            >
                                <span class="font-bold">{notice_icon(notice.kind)}</span>
                                <span>{notice.message}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
