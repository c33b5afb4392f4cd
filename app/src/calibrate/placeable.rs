use patternfly_yew::prelude::*;
use yew::prelude::*;

use crate::app::CalibrationRoute;
use crate::page::ViewPage;
use crate::store::{use_store, CalibrationAction, Selection};

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub instrument: AttrValue,
    pub placeable: AttrValue,
}

#[function_component(Placeable)]
pub fn placeable(props: &Props) -> Html {
    let store = use_store();

    {
        let store = store.clone();
        let selection = Selection {
            instrument: props.instrument.to_string(),
            placeable: Some(props.placeable.to_string()),
        };
        use_effect_with(selection, move |selection| {
            if let Some(store) = &store {
                store.dispatch(CalibrationAction::Select(selection.clone()));
            }
            || ()
        });
    }

    let Some(store) = store else {
        return html! {};
    };

    let saved = store.is_calibrated(&props.instrument, &props.placeable);

    let onclick = {
        let store = store.clone();
        let instrument = props.instrument.to_string();
        let placeable = props.placeable.to_string();
        Callback::from(move |_: MouseEvent| {
            store.dispatch(CalibrationAction::MarkCalibrated {
                instrument: instrument.clone(),
                placeable: placeable.clone(),
            })
        })
    };

    let parent = CalibrationRoute::Instrument {
        instrument: props.instrument.to_string(),
    };

    html!(
        <ViewPage
            title={format!("Calibrate {} with {}", props.placeable, props.instrument)}
            parent={Some(parent)}
        >
            <Button
                variant={ButtonVariant::Primary}
                label={if saved { "Position saved" } else { "Save position" }}
                disabled={saved}
                {onclick}
            />
        </ViewPage>
    )
}
