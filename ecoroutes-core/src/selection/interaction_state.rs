use serde::{Deserialize, Serialize};

use super::SelectionState;

/// pointer input on a node of a chart or map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionEvent {
    HoverStart(String),
    HoverEnd,
    /// toggles the node in the selection
    Click(String),
    Clear,
}

/// hover and selection state of a view. transitions are pure: rendering reads
/// the state, input handlers replace it with [`InteractionState::transition`].
///
/// ```
/// use ecoroutes_core::selection::{InteractionEvent as E, InteractionState};
///
/// let state = InteractionState::default()
///     .transition(E::HoverStart(String::from("France")))
///     .transition(E::Click(String::from("France")))
///     .transition(E::HoverEnd);
/// assert!(state.is_selected("France"));
/// assert_eq!(state.hovered(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovered {
        node: String,
        selection: SelectionState,
    },
    Selected(SelectionState),
}

impl InteractionState {
    pub fn transition(self, event: InteractionEvent) -> InteractionState {
        use InteractionEvent as E;
        use InteractionState as S;
        match (self, event) {
            (_, E::Clear) => S::Idle,
            (S::Idle, E::HoverStart(node)) => S::Hovered {
                node,
                selection: SelectionState::default(),
            },
            (S::Idle, E::HoverEnd) => S::Idle,
            (S::Idle, E::Click(node)) => S::from_selection(SelectionState::from_iter([node])),
            (S::Hovered { selection, .. }, E::HoverStart(node)) => S::Hovered { node, selection },
            (S::Hovered { selection, .. }, E::HoverEnd) => S::from_selection(selection),
            (
                S::Hovered {
                    node,
                    mut selection,
                },
                E::Click(clicked),
            ) => {
                selection.toggle(&clicked);
                S::Hovered { node, selection }
            }
            (S::Selected(selection), E::HoverStart(node)) => S::Hovered { node, selection },
            (S::Selected(selection), E::HoverEnd) => S::Selected(selection),
            (S::Selected(mut selection), E::Click(clicked)) => {
                selection.toggle(&clicked);
                S::from_selection(selection)
            }
        }
    }

    /// applies a sequence of events in order
    pub fn replay<I>(self, events: I) -> InteractionState
    where
        I: IntoIterator<Item = InteractionEvent>,
    {
        events.into_iter().fold(self, |state, e| state.transition(e))
    }

    pub fn hovered(&self) -> Option<&str> {
        match self {
            InteractionState::Hovered { node, .. } => Some(node),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<&SelectionState> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Hovered { selection, .. } => Some(selection),
            InteractionState::Selected(selection) => Some(selection),
        }
    }

    pub fn is_selected(&self, node: &str) -> bool {
        self.selection().map(|s| s.contains(node)).unwrap_or_default()
    }

    fn from_selection(selection: SelectionState) -> InteractionState {
        if selection.is_empty() {
            InteractionState::Idle
        } else {
            InteractionState::Selected(selection)
        }
    }
}
