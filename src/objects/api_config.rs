use wasm_bindgen::JsCast;

/// Name of the optional `<meta>` tag carrying the backend base url.
pub const API_BASE_META: &str = "vod-chat-console-api-base";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub list_vods_path: String,
    pub download_path: String,
    pub generate_personas_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            list_vods_path: "/list_vods".into(),
            download_path: "/download_twitch".into(),
            generate_personas_path: "/generate_personas".into(),
        }
    }
}

impl ApiConfig {
    /// Defaults, with the base url taken from the host page if it sets one.
    pub fn load() -> Self {
        let base_url = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| {
                document
                    .query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
                    .ok()
                    .flatten()
            })
            .and_then(|elem| elem.dyn_into::<web_sys::HtmlMetaElement>().ok())
            .map(|meta| meta.content());

        match base_url {
            Some(base_url) => Self::default().with_base_url(&base_url),
            None => Self::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn list_vods_url(&self) -> String {
        self.endpoint(&self.list_vods_path)
    }

    pub fn download_url(&self) -> String {
        self.endpoint(&self.download_path)
    }

    pub fn generate_personas_url(&self) -> String {
        self.endpoint(&self.generate_personas_path)
    }
}
