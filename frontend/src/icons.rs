//! Agent id → card glyph lookup.
//!
//! Presentation data only.  The compiled-in table covers the agents the
//! DATAR backend ships with; `window.DATAR_CONFIG.agent_icons` can add or
//! replace entries without a rebuild.

use std::collections::HashMap;

use crate::constants::FALLBACK_AGENT_EMOJI;

const DEFAULT_ICONS: [(&str, &str); 8] = [
    ("root_agent", "🌿"),
    ("Gente_Montaña", "⛰️"),
    ("PastoBogotano", "🌾"),
    ("DiarioIntuitivo", "📔"),
    ("SequentialPipelineAgent", "🦎"),
    ("agente_bosque", "🌳"),
    ("agente_sonido", "🔊"),
    ("oráculo", "🔮"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct IconTable {
    icons: HashMap<String, String>,
}

impl Default for IconTable {
    fn default() -> Self {
        Self {
            icons: DEFAULT_ICONS
                .iter()
                .map(|(id, glyph)| (id.to_string(), glyph.to_string()))
                .collect(),
        }
    }
}

impl IconTable {
    /// Default table with `overrides` merged on top.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut table = Self::default();
        for (id, glyph) in overrides {
            table.icons.insert(id.clone(), glyph.clone());
        }
        table
    }

    pub fn agent_icon(&self, agent_id: &str) -> &str {
        self.icons
            .get(agent_id)
            .map(String::as_str)
            .unwrap_or(FALLBACK_AGENT_EMOJI)
    }
}
