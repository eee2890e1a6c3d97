use crate::download::save_remote;
use crate::services::use_services;
use crate::session::use_session;
use coloria_core::filename::generated_image_file_name;
use coloria_core::generation::{GenerationError, GENERATION_FAILED};
use coloria_core::upload::{save_generated_image, SAVE_FAILED, SAVE_SUCCEEDED};
use coloria_ui::{GeneratorView, Notification};
use dioxus::prelude::*;
use tracing::{error, info, warn};

#[component]
pub fn Generator() -> Element {
    let services = use_services();
    let session = use_session();
    let mut prompt = use_signal(String::new);
    // Prompt the current image was generated from; saving uses this, not the live textarea.
    let mut generated_prompt = use_signal(String::new);
    let mut image_url = use_signal(|| None::<String>);
    let mut generating = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let mut notification = use_signal(|| None::<Notification>);

    let generation = services.generation.clone();
    let on_generate = move |_| {
        let text = prompt();
        if generating() || text.trim().is_empty() {
            return;
        }
        generating.set(true);
        error_message.set(None);
        let generation = generation.clone();
        spawn(async move {
            match generation.generate(&text).await {
                Ok(url) => {
                    info!("Generated image for prompt");
                    image_url.set(Some(url));
                    generated_prompt.set(text);
                }
                Err(GenerationError::Validation(message)) => error_message.set(Some(message)),
                Err(e) => {
                    error!("Image generation failed: {}", e);
                    error_message.set(Some(GENERATION_FAILED.to_string()));
                }
            }
            generating.set(false);
        });
    };

    let save_services = services.clone();
    let on_save = move |_| {
        if saving() {
            return;
        }
        let (Some(current), Some(url)) = (session.session(), image_url()) else {
            return;
        };
        saving.set(true);
        let services = save_services.clone();
        spawn(async move {
            let gateway = services.gateway(&current);
            let result = save_generated_image(
                &gateway,
                &services.fetcher,
                &current.user.id,
                &url,
                &generated_prompt(),
            )
            .await;
            match result {
                Ok(_) => notification.set(Some(Notification::success(SAVE_SUCCEEDED))),
                Err(e) => {
                    error!("Saving image failed: {}", e.message());
                    notification.set(Some(Notification::error(SAVE_FAILED)));
                }
            }
            saving.set(false);
        });
    };

    let fetcher = services.fetcher.clone();
    let on_download = move |_| {
        let Some(url) = image_url() else {
            return;
        };
        let fetcher = fetcher.clone();
        spawn(async move {
            let name = generated_image_file_name(chrono::Utc::now().timestamp_millis());
            if let Err(e) = save_remote(&fetcher, &url, &name).await {
                warn!("Download failed: {}", e);
                error_message.set(Some("Failed to download image".to_string()));
            }
        });
    };

    rsx! {
        GeneratorView {
            prompt: prompt(),
            on_prompt: move |v| prompt.set(v),
            on_generate,
            generating: generating(),
            image_url: image_url(),
            saving: saving(),
            on_save,
            on_download,
            error: error_message(),
            notification: notification(),
            on_dismiss_notification: move |_| notification.set(None),
        }
    }
}
