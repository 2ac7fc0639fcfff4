// src/analysis/pairing.rs
use super::agents::AgentDescriptor;
use super::report::AgentAnalysis;

/// A descriptor and whatever the service returned for it.
/// `analysis` is `None` for the "no data" placeholder card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentCard {
    pub agent: AgentDescriptor,
    pub analysis: Option<AgentAnalysis>,
}

impl AgentCard {
    pub fn is_placeholder(&self) -> bool {
        self.analysis.is_none()
    }
}

/// Positional pairing: `descriptors[i]` with `analyses[i]`. Descriptors
/// past the end of `analyses` become placeholders; surplus analyses are
/// dropped.
pub fn pair_agents(descriptors: &[AgentDescriptor], analyses: &[AgentAnalysis]) -> Vec<AgentCard> {
    descriptors
        .iter()
        .enumerate()
        .map(|(i, agent)| AgentCard {
            agent: *agent,
            analysis: analyses.get(i).cloned(),
        })
        .collect()
}

/// Pairs each descriptor with the `thoughts` entry keyed by its
/// identifier. Descriptors left without a match take the unmatched
/// entries in document order, so numerically keyed responses still pair
/// positionally.
pub fn pair_by_identifier(
    descriptors: &[AgentDescriptor],
    thoughts: &[(String, AgentAnalysis)],
) -> Vec<AgentCard> {
    let mut used = vec![false; thoughts.len()];

    let mut paired: Vec<Option<&AgentAnalysis>> = descriptors
        .iter()
        .map(|agent| {
            let idx = thoughts
                .iter()
                .enumerate()
                .position(|(i, (key, _))| !used[i] && agent.matches_key(key))?;
            used[idx] = true;
            Some(&thoughts[idx].1)
        })
        .collect();

    let mut leftovers = thoughts
        .iter()
        .zip(used.iter())
        .filter(|(_, used)| !**used)
        .map(|((_, analysis), _)| analysis);

    for slot in paired.iter_mut().filter(|slot| slot.is_none()) {
        match leftovers.next() {
            Some(analysis) => *slot = Some(analysis),
            None => break,
        }
    }

    descriptors
        .iter()
        .zip(paired)
        .map(|(agent, analysis)| AgentCard {
            agent: *agent,
            analysis: analysis.cloned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::agents::AGENTS;

    fn analysis(tag: &str) -> AgentAnalysis {
        AgentAnalysis {
            thought: format!("thinking {}", tag),
            output: format!("output {}", tag),
        }
    }

    fn outputs(cards: &[AgentCard]) -> Vec<Option<String>> {
        cards
            .iter()
            .map(|c| c.analysis.as_ref().map(|a| a.output.clone()))
            .collect()
    }

    #[test]
    fn four_analyses_pair_in_order() {
        let analyses: Vec<_> = ["a", "b", "c", "d"].iter().map(|t| analysis(t)).collect();
        let cards = pair_agents(&AGENTS, &analyses);
        assert_eq!(cards.len(), 4);
        assert!(cards.iter().all(|c| !c.is_placeholder()));
        assert_eq!(cards[0].agent.name, "Researcher");
        assert_eq!(cards[3].analysis.as_ref().unwrap().output, "output d");
    }

    #[test]
    fn short_response_yields_placeholders() {
        let analyses = vec![analysis("a"), analysis("b")];
        let cards = pair_agents(&AGENTS, &analyses);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards.iter().filter(|c| c.is_placeholder()).count(), 2);
        assert!(cards[2].is_placeholder() && cards[3].is_placeholder());
        assert_eq!(cards[1].agent.name, "Case Builder");
    }

    #[test]
    fn surplus_analyses_are_dropped() {
        let analyses: Vec<_> = (0..6).map(|i| analysis(&i.to_string())).collect();
        assert_eq!(pair_agents(&AGENTS, &analyses).len(), 4);
        assert!(pair_agents(&AGENTS, &[]).iter().all(AgentCard::is_placeholder));
    }

    #[test]
    fn named_keys_pair_regardless_of_order() {
        let thoughts = vec![
            ("weakness identifier".to_string(), analysis("w")),
            ("concluder".to_string(), analysis("c")),
            ("case_builder".to_string(), analysis("b")),
        ];
        let cards = pair_by_identifier(&AGENTS, &thoughts);
        assert_eq!(
            outputs(&cards),
            [
                None,
                Some("output b".to_string()),
                Some("output c".to_string()),
                Some("output w".to_string()),
            ]
        );
    }

    #[test]
    fn numeric_keys_fall_back_to_document_order() {
        let thoughts: Vec<_> = ["1", "2", "3", "4"]
            .iter()
            .map(|k| (k.to_string(), analysis(k)))
            .collect();
        let cards = pair_by_identifier(&AGENTS, &thoughts);
        assert_eq!(
            outputs(&cards),
            ["1", "2", "3", "4"].map(|k| Some(format!("output {}", k)))
        );
    }

    #[test]
    fn mixed_keys_fill_gaps_with_unmatched_entries() {
        let thoughts = vec![
            ("extra".to_string(), analysis("x")),
            ("researcher".to_string(), analysis("r")),
        ];
        let cards = pair_by_identifier(&AGENTS, &thoughts);
        assert_eq!(
            outputs(&cards),
            [Some("output r".to_string()), Some("output x".to_string()), None, None]
        );
    }
}
