use super::{FormError, VodId};
use serde::Deserialize;

pub const VOD_ID_FIELD: &str = "vod_id";
pub const NUM_PERSONAS_FIELD: &str = "num_personas";
pub const DEFAULT_NUM_PERSONAS: u32 = 3;
pub const MAX_PERSONAS: u32 = 10;

/// Answer of the persona generation endpoint. Generated personas and
/// summaries are stored by the backend and not read here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersonaOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaRequest {
    pub vod_id: VodId,
    pub num_personas: u32,
}

impl PersonaRequest {
    /// `vod_id` is the raw value of the VOD select, the placeholder being empty.
    /// Any other value is sent and linked exactly as selected.
    pub fn parse(vod_id: &str, num_personas: &str) -> Result<Self, FormError> {
        if vod_id.is_empty() {
            return Err(FormError::NoVodSelected);
        }

        let vod_id = VodId::from(vod_id);

        let num_personas = match num_personas.trim() {
            "" => DEFAULT_NUM_PERSONAS,
            raw => match raw.parse::<u32>() {
                Ok(count) if (1..=MAX_PERSONAS).contains(&count) => count,
                _ => {
                    return Err(FormError::InvalidPersonaCount {
                        raw: String::from(raw),
                        max: MAX_PERSONAS,
                    })
                }
            },
        };

        Ok(Self {
            vod_id,
            num_personas,
        })
    }

    pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            (VOD_ID_FIELD, self.vod_id.to_string()),
            (NUM_PERSONAS_FIELD, self.num_personas.to_string()),
        ]
    }
}
