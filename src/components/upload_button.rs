use gloo::file::File;
use gloo::file::futures::read_as_data_url;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::error::DomError;
use crate::util::{clog, cwarn};

#[derive(Properties, PartialEq, Clone)]
pub struct UploadButtonProps {
    /// Receives the picked image as a data URL.
    pub on_image: Callback<AttrValue>,
    /// A user picture is already installed.
    #[prop_or_default]
    pub custom: bool,
}

async fn load_data_url(file: File) -> Result<String, DomError> {
    let mime = file.raw_mime_type();
    if !mime.starts_with("image/") {
        return Err(DomError::NotAnImage(mime));
    }
    read_as_data_url(&file)
        .await
        .map_err(|e| DomError::FileRead(e.to_string()))
}

#[function_component(UploadButton)]
pub fn upload_button(props: &UploadButtonProps) -> Html {
    let on_change = {
        let on_image = props.on_image.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");
            let file = File::from(file);
            clog(&format!("reading background {} ({} bytes)", file.name(), file.size()));
            let on_image = on_image.clone();
            spawn_local(async move {
                match load_data_url(file).await {
                    Ok(url) => on_image.emit(AttrValue::from(url)),
                    Err(DomError::NotAnImage(mime)) => {
                        clog(&format!("ignoring non-image selection {mime:?}"))
                    }
                    Err(err) => cwarn(&format!("background upload failed: {err}")),
                }
            });
        })
    };
    html! {
        <label class="upload-button" style="display:inline-flex; align-items:center; gap:6px; padding:6px 12px; border:1px solid #30363d; border-radius:8px; background:#21262d; color:#f0f6fc; cursor:pointer;">
            { if props.custom { "📷 Change picture" } else { "📷 Upload" } }
            <input
                type="file"
                accept="image/*"
                class="upload-hidden-input"
                style="display:none;"
                onchange={on_change}
            />
        </label>
    }
}
