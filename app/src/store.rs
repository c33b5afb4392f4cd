use std::collections::BTreeSet;
use std::rc::Rc;

use crate::app::CalibrationRoute;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub instrument: String,
    pub placeable: Option<String>,
}

impl From<&CalibrationRoute> for Selection {
    fn from(route: &CalibrationRoute) -> Self {
        Selection {
            instrument: route.instrument().to_string(),
            placeable: route.placeable().map(str::to_string),
        }
    }
}

/// Session state shared by all views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalibrationState {
    pub selection: Option<Selection>,
    /// `(instrument, placeable)` pairs saved during this session.
    pub calibrated: BTreeSet<(String, String)>,
}

impl CalibrationState {
    pub fn is_calibrated(&self, instrument: &str, placeable: &str) -> bool {
        self.calibrated
            .iter()
            .any(|(i, p)| i == instrument && p == placeable)
    }

    pub fn calibrated_for<'a>(&'a self, instrument: &'a str) -> impl Iterator<Item = &'a str> {
        self.calibrated
            .iter()
            .filter(move |(i, _)| i == instrument)
            .map(|(_, p)| p.as_str())
    }
}

pub enum CalibrationAction {
    Select(Selection),
    MarkCalibrated {
        instrument: String,
        placeable: String,
    },
    Clear,
}

impl Reducible for CalibrationState {
    type Action = CalibrationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CalibrationAction::Select(selection) => {
                if self.selection.as_ref() == Some(&selection) {
                    return self;
                }
                let mut next = (*self).clone();
                next.selection = Some(selection);
                next.into()
            }
            CalibrationAction::MarkCalibrated {
                instrument,
                placeable,
            } => {
                if self.is_calibrated(&instrument, &placeable) {
                    return self;
                }
                log::info!("saved position of {placeable} for {instrument}");
                let mut next = (*self).clone();
                next.calibrated.insert((instrument, placeable));
                next.into()
            }
            CalibrationAction::Clear => Rc::new(CalibrationState::default()),
        }
    }
}

pub type StoreContext = UseReducerHandle<CalibrationState>;

/// The session store, or `None` for components rendered outside the shell.
#[hook]
pub fn use_store() -> Option<StoreContext> {
    let store = use_context::<StoreContext>();
    if store.is_none() {
        log::warn!("calibration store is not provided, rendering nothing");
    }
    store
}

#[cfg(test)]
mod test {
    use super::*;

    fn mark(state: Rc<CalibrationState>, instrument: &str, placeable: &str) -> Rc<CalibrationState> {
        state.reduce(CalibrationAction::MarkCalibrated {
            instrument: instrument.into(),
            placeable: placeable.into(),
        })
    }

    #[test]
    fn selects_routed_entity() {
        let route = CalibrationRoute::Placeable {
            instrument: "p200".into(),
            placeable: "plate".into(),
        };
        let state = Rc::new(CalibrationState::default())
            .reduce(CalibrationAction::Select(Selection::from(&route)));

        assert_eq!(
            state.selection,
            Some(Selection {
                instrument: "p200".into(),
                placeable: Some("plate".into()),
            })
        );
    }

    #[test]
    fn reselecting_keeps_state() {
        let selection = Selection {
            instrument: "p10".into(),
            placeable: None,
        };
        let state = Rc::new(CalibrationState::default())
            .reduce(CalibrationAction::Select(selection.clone()));
        let again = state.clone().reduce(CalibrationAction::Select(selection));
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn marking_is_idempotent() {
        let state = mark(Rc::new(CalibrationState::default()), "p200", "plate");
        let again = mark(state.clone(), "p200", "plate");

        assert!(Rc::ptr_eq(&state, &again));
        assert!(state.is_calibrated("p200", "plate"));
        assert!(!state.is_calibrated("p10", "plate"));
    }

    #[test]
    fn lists_placeables_per_instrument() {
        let state = Rc::new(CalibrationState::default());
        let state = mark(state, "p200", "tiprack");
        let state = mark(state, "p200", "plate");
        let state = mark(state, "p10", "trash");

        assert_eq!(
            state.calibrated_for("p200").collect::<Vec<_>>(),
            vec!["plate", "tiprack"]
        );
        assert_eq!(state.calibrated_for("p10").collect::<Vec<_>>(), vec!["trash"]);
    }

    #[test]
    fn clear_resets_session() {
        let state = mark(Rc::new(CalibrationState::default()), "p200", "plate");
        let state = state.reduce(CalibrationAction::Clear);
        assert_eq!(*state, CalibrationState::default());
    }
}
