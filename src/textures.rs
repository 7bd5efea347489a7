use crate::mips::mip_chain;
use image::RgbaImage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("fetch {url} failed: {message}")]
    Fetch { url: String, message: String },
    #[error("fetch {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("decode {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: image::ImageError,
    },
}

/// A fetched image as RGBA8 mip levels, base level first.
pub struct DecodedImage {
    pub url: String,
    pub levels: Vec<RgbaImage>,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.levels.first().map_or(0, |l| l.width())
    }

    pub fn height(&self) -> u32 {
        self.levels.first().map_or(0, |l| l.height())
    }
}

/// Decoded images waiting to be uploaded by the next frame.
pub type ImageInbox = Rc<RefCell<Vec<DecodedImage>>>;

fn fetch_error(url: &str, err: wasm_bindgen::JsValue) -> AssetError {
    AssetError::Fetch {
        url: url.to_string(),
        message: format!("{:?}", err),
    }
}

pub async fn fetch_image(url: &str) -> Result<DecodedImage, AssetError> {
    let window = web::window().ok_or_else(|| AssetError::Fetch {
        url: url.to_string(),
        message: "no window".to_string(),
    })?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fetch_error(url, e))?;
    let resp: web::Response = resp.dyn_into().map_err(|e| fetch_error(url, e))?;
    if !resp.ok() {
        return Err(AssetError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(|e| fetch_error(url, e))?)
        .await
        .map_err(|e| fetch_error(url, e))?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();
    let rgba = image::load_from_memory(&bytes)
        .map_err(|source| AssetError::Decode {
            url: url.to_string(),
            source,
        })?
        .to_rgba8();
    Ok(DecodedImage {
        url: url.to_string(),
        levels: mip_chain(rgba),
    })
}

/// Fetch every url once in the background. Failures are logged and the
/// placeholder texture stays in place.
pub fn spawn_fetches(urls: impl IntoIterator<Item = String>, inbox: ImageInbox) {
    for url in urls {
        let inbox = inbox.clone();
        spawn_local(async move {
            match fetch_image(&url).await {
                Ok(img) => {
                    log::info!(
                        "[texture] loaded {} ({}x{}, {} mips)",
                        img.url,
                        img.width(),
                        img.height(),
                        img.levels.len()
                    );
                    inbox.borrow_mut().push(img);
                }
                Err(e) => log::warn!("[texture] {}", e),
            }
        });
    }
}
