// src/analysis/agents.rs

/// One of the fixed reviewers whose output is shown as a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    /// Card accent colour (left border), RGB.
    pub accent: [u8; 3],
}

pub static AGENTS: [AgentDescriptor; 4] = [
    AgentDescriptor {
        id: "researcher",
        name: "Researcher",
        role: "Legal Research & Precedent Analysis",
        accent: [16, 185, 129],
    },
    AgentDescriptor {
        id: "case_builder",
        name: "Case Builder",
        role: "Argument Structure & Evidence Organization",
        accent: [59, 130, 246],
    },
    AgentDescriptor {
        id: "concluder",
        name: "Concluder",
        role: "Strategic Synthesis & Final Recommendations",
        accent: [168, 85, 247],
    },
    AgentDescriptor {
        id: "weakness_identifier",
        name: "Weakness Identifier",
        role: "Risk Assessment & Vulnerability Analysis",
        accent: [245, 158, 11],
    },
];

impl AgentDescriptor {
    /// True when a `thoughts` key names this agent. Case, whitespace,
    /// `_` and `-` are ignored, so "Case Builder", "case_builder" and
    /// "case-builder" all match.
    pub fn matches_key(&self, key: &str) -> bool {
        let key = normalize_key(key);
        !key.is_empty() && (key == normalize_key(self.id) || key == normalize_key(self.name))
    }
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
