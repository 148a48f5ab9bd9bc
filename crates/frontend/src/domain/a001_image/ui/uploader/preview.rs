use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// `data:` URI for an in-memory image
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Read a picked file into a data URI for the preview
pub async fn read_data_uri(file: &web_sys::File) -> Result<String, String> {
    use wasm_bindgen_futures::JsFuture;

    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;

    let uint8_array = js_sys::Uint8Array::new(&array_buffer);
    let mut bytes = vec![0; uint8_array.length() as usize];
    uint8_array.copy_to(&mut bytes);

    Ok(data_uri(&file.type_(), &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri() {
        assert_eq!(data_uri("image/png", b"abc"), "data:image/png;base64,YWJj");
        assert_eq!(data_uri("image/gif", &[]), "data:image/gif;base64,");
    }
}
