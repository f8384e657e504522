//! CSV export of order lists and download of generated previews.
//!
//! The web build hands the bytes to the browser as a Blob download. Desktop
//! writes them into the per-user data directory and reports the path.

use api::GeneratedImage;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

use super::catalog::service_title;
use super::design::design_file_name;
use super::format::{format_amount, timestamp_slug};
use super::order::Order;
use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("download unavailable: {0}")]
    Unavailable(String),
    #[error("writing export failed: {0}")]
    Io(String),
    #[error("image payload is not valid base64: {0}")]
    Decode(String),
}

/// Where the bytes ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Handed to the browser's download manager.
    Browser,
    /// Written to this path.
    Saved(String),
}

const CSV_HEADER: [&str; 12] = [
    "order_id",
    "user_id",
    "service",
    "size",
    "quantity",
    "material",
    "price",
    "status",
    "created_at",
    "file_name",
    "file_size",
    "notes",
];

pub fn orders_csv(orders: &[Order], lang: Language) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(orders.len() + 1);
    rows.push(CSV_HEADER.iter().map(|h| h.to_string()).collect());
    for order in orders {
        rows.push(vec![
            order.id.clone(),
            order.user_id.clone(),
            service_title(&order.service_id, lang).to_string(),
            order.specs.size.clone(),
            order.specs.quantity.to_string(),
            order.specs.material.to_string(),
            format_amount(order.price),
            order.status.to_string(),
            order.created_at.clone(),
            order.file_name.clone().unwrap_or_default(),
            order.file_size.clone().unwrap_or_default(),
            order.notes.clone().unwrap_or_default(),
        ]);
    }

    let mut csv = String::new();
    for row in rows {
        let line = row
            .iter()
            .map(|field| escape_csv(field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }
    csv
}

fn escape_csv(value: &str) -> String {
    let needs_quotes = value.contains([',', '"', '\n', '\r']);
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

pub async fn export_orders(orders: &[Order], lang: Language) -> Result<Delivery, ExportError> {
    let filename = format!("haweya-orders-{}.csv", timestamp_slug());
    let csv = orders_csv(orders, lang);
    tracing::info!(rows = orders.len(), %filename, "exporting orders");
    download_bytes(&filename, "text/csv", csv.into_bytes()).await
}

pub async fn download_image(image: &GeneratedImage) -> Result<Delivery, ExportError> {
    let bytes = STANDARD
        .decode(image.base64_data.trim())
        .map_err(|err| ExportError::Decode(err.to_string()))?;
    let filename = design_file_name(&timestamp_slug());
    download_bytes(&filename, &image.mime_type, bytes).await
}

async fn download_bytes(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<Delivery, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let unavailable = |what: &str| ExportError::Unavailable(what.to_string());

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| unavailable("failed to create blob"))?;
        let url =
            Url::create_object_url_with_blob(&blob).map_err(|_| unavailable("no object url"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| unavailable("document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| unavailable("unable to create anchor"))?
            .dyn_into()
            .map_err(|_| unavailable("anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| unavailable("missing body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(Delivery::Browser)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| ExportError::Io(err.to_string()))?;
        let path = dir.join(filename);
        fs::write(&path, &bytes).map_err(|err| ExportError::Io(err.to_string()))?;
        tracing::info!(path = %path.display(), "export written");
        Ok(Delivery::Saved(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, ExportError> {
    let dirs = directories::ProjectDirs::from("ly", "Haweya", "Haweya")
        .ok_or_else(|| ExportError::Unavailable("unable to determine export directory".into()))?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::estimate::Material;
    use crate::core::order::{OrderSpecs, OrderStatus};

    fn order() -> Order {
        let mut order = Order::new_pending(
            "u1",
            "1",
            OrderSpecs {
                size: "A4".into(),
                quantity: 150,
                material: Material::Luxury,
            },
            180.0,
        );
        order.status = OrderStatus::Ready;
        order
    }

    #[test]
    fn header_and_rows_line_up() {
        let csv = orders_csv(&[order()], Language::English);
        let mut lines = csv.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("order_id,user_id,service"));
        let row = lines.next().unwrap();
        assert_eq!(row.split(',').count(), CSV_HEADER.len());
        assert!(row.contains(",Business Cards,A4,150,Luxury,180.00,Ready,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn awkward_fields_are_quoted() {
        let mut order = order();
        order.notes = Some("gold, \"matte\"\nsecond line".into());
        let csv = orders_csv(&[order], Language::English);
        assert!(csv.contains("\"gold, \"\"matte\"\"\nsecond line\""));
    }

    #[test]
    fn service_names_follow_language() {
        let csv = orders_csv(&[order()], Language::Arabic);
        assert!(csv.contains("كروت شخصية"));
    }

    #[test]
    fn escape_leaves_plain_values_alone() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv(""), "");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
    }

    #[test]
    fn bad_base64_is_a_decode_error() {
        let image = GeneratedImage {
            mime_type: "image/png".into(),
            base64_data: "%%%".into(),
        };
        let err = futures::executor::block_on(download_image(&image)).unwrap_err();
        assert!(matches!(err, ExportError::Decode(_)));
    }
}
