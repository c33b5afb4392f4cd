use yew::prelude::*;
use yew_router::prelude::Link;

use crate::app::CalibrationRoute;
use crate::page::ViewPage;
use crate::store::{use_store, CalibrationAction, Selection};

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub instrument: AttrValue,
}

#[function_component(CalibrateInstrument)]
pub fn calibrate_instrument(props: &Props) -> Html {
    let store = use_store();

    {
        let store = store.clone();
        use_effect_with(props.instrument.clone(), move |instrument| {
            if let Some(store) = &store {
                store.dispatch(CalibrationAction::Select(Selection {
                    instrument: instrument.to_string(),
                    placeable: None,
                }));
            }
            || ()
        });
    }

    let Some(store) = store else {
        return html! {};
    };

    let calibrated = store
        .calibrated_for(&props.instrument)
        .map(|placeable| CalibrationRoute::Placeable {
            instrument: props.instrument.to_string(),
            placeable: placeable.to_string(),
        })
        .collect::<Vec<_>>();

    let summary = if calibrated.is_empty() {
        html!(<p>{"No placeables calibrated yet."}</p>)
    } else {
        html!(
            <ul>
                { for calibrated.into_iter().map(|to| {
                    let caption = to.placeable().unwrap_or_default().to_string();
                    html!(<li><Link<CalibrationRoute> {to}>{ caption }</Link<CalibrationRoute>></li>)
                })}
            </ul>
        )
    };

    html!(
        <ViewPage title={format!("Calibrate {}", props.instrument)}>
            { summary }
        </ViewPage>
    )
}
