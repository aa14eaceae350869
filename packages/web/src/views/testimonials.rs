use api::{Testimonial, TestimonialDraft};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaPlus, FaStar, FaTrash};
use dioxus_free_icons::Icon;

use ui::{
    data_url_image, read_file_as_data_url, toast_error, toast_success, use_mutation,
    use_paginated_list, use_session, use_toasts, ConfirmDialog, ModalOverlay, PageHeader,
    PaginationControl, SpinnerInline,
};

const PAGE_SIZE: u32 = 10;

#[component]
pub fn Testimonials() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let mut page = use_signal(|| 1u32);
    let mut list = use_paginated_list(page.into(), PAGE_SIZE, move |p, l| {
        let client = session.client();
        async move { client.list_testimonials(p, l).await }
    });

    let mut modal_open = use_signal(|| false);
    let mut editing_id = use_signal(|| Option::<String>::None);
    let mut deleting_id = use_signal(|| Option::<String>::None);
    let mut save = use_mutation();
    let mut remove = use_mutation();

    let mut client_name = use_signal(String::new);
    let mut client_position = use_signal(String::new);
    let mut client_company = use_signal(String::new);
    let mut testimonial = use_signal(String::new);
    let mut rating = use_signal(|| 5.0f32);
    let mut is_featured = use_signal(|| false);
    let mut avatar_url = use_signal(String::new);

    let mut reset_form = move || {
        client_name.set(String::new());
        client_position.set(String::new());
        client_company.set(String::new());
        testimonial.set(String::new());
        rating.set(5.0);
        is_featured.set(false);
        avatar_url.set(String::new());
        editing_id.set(None);
    };

    let mut open_edit = move |item: Testimonial| {
        client_name.set(item.client_name);
        client_position.set(item.client_position);
        client_company.set(item.client_company);
        testimonial.set(item.testimonial);
        rating.set(item.rating);
        is_featured.set(item.is_featured);
        avatar_url.set(item.client_avatar.url);
        editing_id.set(Some(item.id));
        modal_open.set(true);
    };

    let handle_avatar = move |evt: FormEvent| async move {
        if let Some(file_engine) = evt.files() {
            if let Some(data_url) = read_file_as_data_url(file_engine).await {
                avatar_url.set(data_url);
            }
        }
    };

    let handle_submit = move |_| async move {
        if client_name().trim().is_empty() {
            toast_error(&mut toasts, "Client name is required");
            return;
        }

        let draft = TestimonialDraft {
            client_name: client_name(),
            client_position: client_position(),
            client_company: client_company(),
            testimonial: testimonial(),
            rating: rating(),
            is_featured: is_featured(),
            client_avatar: data_url_image(&avatar_url()),
        };
        let client = session.client();

        let result = match editing_id() {
            Some(id) => save
                .run(async { client.update_testimonial(&id, &draft).await })
                .await
                .map(|_| "Testimonial updated"),
            None => save
                .run(async { client.create_testimonial(&draft).await })
                .await
                .map(|_| "Testimonial created"),
        };

        match result {
            Ok(message) => {
                toast_success(&mut toasts, message);
                modal_open.set(false);
                reset_form();
                list.refetch();
            }
            Err(err) => toast_error(&mut toasts, err.to_string()),
        }
    };

    let confirm_delete = move |_| async move {
        let Some(id) = deleting_id() else { return };
        let client = session.client();
        match remove
            .run(async { client.delete_testimonial(&id).await })
            .await
        {
            Ok(()) => {
                toast_success(&mut toasts, "Testimonial deleted");
                list.refetch();
            }
            Err(err) => toast_error(&mut toasts, err.to_string()),
        }
        deleting_id.set(None);
    };

    rsx! {
        div {
            class: "view-page",

            PageHeader {
                title: "Testimonials",
                subtitle: "Manage client testimonials",
                button {
                    class: "primary with-icon",
                    onclick: move |_| {
                        reset_form();
                        modal_open.set(true);
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add Testimonial"
                }
            }

            div {
                class: "card",
                if list.loading() {
                    SpinnerInline {}
                } else if let Some(error) = list.error() {
                    div { class: "table-empty", "{error}" }
                } else if list.items().is_empty() {
                    div { class: "table-empty", "No testimonials yet." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Client" }
                                th { "Company" }
                                th { "Testimonial" }
                                th { "Rating" }
                                th { "Featured" }
                                th { "" }
                            }
                        }
                        tbody {
                            for item in list.items() {
                                tr {
                                    key: "{item.id}",
                                    td {
                                        class: "cell-primary",
                                        if !item.client_avatar.url.is_empty() {
                                            img { class: "cell-thumb round", src: "{item.client_avatar.url}", alt: "" }
                                        }
                                        "{item.client_name}"
                                    }
                                    td { "{item.client_company}" }
                                    td {
                                        class: "cell-muted cell-truncate",
                                        title: "{item.testimonial}",
                                        "{item.testimonial}"
                                    }
                                    td {
                                        span {
                                            class: "rating",
                                            Icon { icon: FaStar, width: 12, height: 12 }
                                            "{item.rating}"
                                        }
                                    }
                                    td { if item.is_featured { "Yes" } else { "-" } }
                                    td {
                                        class: "row-actions",
                                        button {
                                            class: "icon-button",
                                            title: "Edit",
                                            onclick: {
                                                let item = item.clone();
                                                move |_| open_edit(item.clone())
                                            },
                                            Icon { icon: FaPen, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-button danger",
                                            title: "Delete",
                                            onclick: {
                                                let id = item.id.clone();
                                                move |_| deleting_id.set(Some(id.clone()))
                                            },
                                            Icon { icon: FaTrash, width: 14, height: 14 }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            PaginationControl {
                current_page: page(),
                has_next_page: list.has_next_page(),
                item_count: list.items().len(),
                on_page_change: move |p| page.set(p),
            }

            if modal_open() {
                ModalOverlay {
                    on_close: move |_| {
                        modal_open.set(false);
                        reset_form();
                    },
                    div {
                        class: "modal-form",
                        h2 { if editing_id().is_some() { "Edit Testimonial" } else { "Add Testimonial" } }

                        div {
                            class: "form-row",
                            div {
                                class: "form-field",
                                label { r#for: "testimonial-client", "Client name" }
                                input {
                                    id: "testimonial-client",
                                    r#type: "text",
                                    value: client_name(),
                                    oninput: move |evt| client_name.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "testimonial-position", "Position" }
                                input {
                                    id: "testimonial-position",
                                    r#type: "text",
                                    value: client_position(),
                                    oninput: move |evt| client_position.set(evt.value()),
                                }
                            }
                        }

                        div {
                            class: "form-row",
                            div {
                                class: "form-field",
                                label { r#for: "testimonial-company", "Company" }
                                input {
                                    id: "testimonial-company",
                                    r#type: "text",
                                    value: client_company(),
                                    oninput: move |evt| client_company.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "testimonial-rating", "Rating" }
                                select {
                                    id: "testimonial-rating",
                                    value: "{rating()}",
                                    onchange: move |evt| {
                                        if let Ok(v) = evt.value().parse::<f32>() {
                                            rating.set(v);
                                        }
                                    },
                                    option { value: "5", "5 - Excellent" }
                                    option { value: "4", "4 - Great" }
                                    option { value: "3", "3 - Good" }
                                    option { value: "2", "2 - Fair" }
                                    option { value: "1", "1 - Poor" }
                                }
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "testimonial-text", "Testimonial" }
                            textarea {
                                id: "testimonial-text",
                                rows: 4,
                                value: testimonial(),
                                oninput: move |evt| testimonial.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "testimonial-avatar", "Client avatar" }
                            input {
                                id: "testimonial-avatar",
                                r#type: "file",
                                accept: "image/*",
                                onchange: handle_avatar,
                            }
                            if !avatar_url().is_empty() {
                                img { class: "image-preview round", src: "{avatar_url()}", alt: "Preview" }
                            }
                        }

                        label {
                            class: "form-check",
                            input {
                                r#type: "checkbox",
                                checked: is_featured(),
                                onchange: move |evt| is_featured.set(evt.checked()),
                            }
                            "Featured testimonial"
                        }

                        div {
                            class: "form-actions",
                            button {
                                class: "primary",
                                disabled: save.loading(),
                                onclick: handle_submit,
                                if save.loading() { "Saving..." } else { "Save" }
                            }
                            button {
                                class: "secondary",
                                onclick: move |_| {
                                    modal_open.set(false);
                                    reset_form();
                                },
                                "Cancel"
                            }
                        }
                    }
                }
            }

            if deleting_id().is_some() {
                ConfirmDialog {
                    title: "Delete testimonial",
                    message: "Are you sure you want to delete this testimonial?",
                    busy: remove.loading(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| deleting_id.set(None),
                }
            }
        }
    }
}
