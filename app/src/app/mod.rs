use crate::calibrate::{CalibrateInstrument, Placeable};
use crate::store::{use_store, CalibrationAction, CalibrationState, StoreContext};
use patternfly_yew::prelude::*;
use yew::prelude::*;
use yew_router::prelude::{BrowserRouter, Link, Routable, Switch as RouterSwitch};

/// Paths the application renders a view for. Anything else renders nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Routable)]
pub enum CalibrationRoute {
    #[at("/calibrate/:instrument")]
    Instrument { instrument: String },
    #[at("/calibrate/:instrument/:placeable")]
    Placeable {
        instrument: String,
        placeable: String,
    },
}

impl CalibrationRoute {
    pub fn instrument(&self) -> &str {
        match self {
            CalibrationRoute::Instrument { instrument } => instrument,
            CalibrationRoute::Placeable { instrument, .. } => instrument,
        }
    }

    pub fn placeable(&self) -> Option<&str> {
        match self {
            CalibrationRoute::Instrument { .. } => None,
            CalibrationRoute::Placeable { placeable, .. } => Some(placeable),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct ShellProps {
    #[prop_or_default]
    pub initial_state: CalibrationState,
    pub title: AttrValue,
}

/// Root of the mounted view tree: provides the store and renders the routed
/// view inside the application frame.
#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    let initial_state = props.initial_state.clone();
    let store = use_reducer(move || initial_state);

    html! {
        <ContextProvider<StoreContext> context={store}>
            <BrowserRouter>
                <AppPage title={props.title.clone()}>
                    <RouterSwitch<CalibrationRoute> render={switch_calibration_route} />
                </AppPage>
            </BrowserRouter>
        </ContextProvider<StoreContext>>
    }
}

fn switch_calibration_route(target: CalibrationRoute) -> Html {
    log::debug!("rendering {target:?}");
    match target {
        CalibrationRoute::Instrument { instrument } => {
            html! {<CalibrateInstrument {instrument} />}
        }
        CalibrationRoute::Placeable {
            instrument,
            placeable,
        } => html! {<Placeable {instrument} {placeable} />},
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct PageProps {
    pub title: AttrValue,
    pub children: Children,
}

#[function_component(AppPage)]
fn page(props: &PageProps) -> Html {
    let sidebar = html_nested! {
        <PageSidebar>
            <SessionNav />
        </PageSidebar>
    };

    let brand = html! (
        <MastheadBrand>
            <h1>{ props.title.clone() }</h1>
        </MastheadBrand>
    );

    html! (
        <Page {brand} {sidebar} >
            { for props.children.iter() }
        </Page>
    )
}

/// Links to everything calibrated so far in this session.
#[function_component(SessionNav)]
fn session_nav() -> Html {
    let Some(store) = use_store() else {
        return html! {};
    };

    let routes = store
        .calibrated
        .iter()
        .map(|(instrument, placeable)| CalibrationRoute::Placeable {
            instrument: instrument.clone(),
            placeable: placeable.clone(),
        })
        .collect::<Vec<_>>();

    let reset = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.dispatch(CalibrationAction::Clear))
    };

    html! (
        <Nav>
            <NavList>
                { for routes.into_iter().map(|to| html!(<SessionNavItem {to} />)) }
            </NavList>
            <Button variant={ButtonVariant::Link} label="Reset session" onclick={reset} />
        </Nav>
    )
}

#[derive(Clone, Debug, PartialEq, Properties)]
struct SessionNavItemProps {
    to: CalibrationRoute,
}

/// A sidebar entry that navigates through the router instead of reloading.
#[function_component(SessionNavItem)]
fn session_nav_item(props: &SessionNavItemProps) -> Html {
    let caption = format!(
        "{} / {}",
        props.to.instrument(),
        props.to.placeable().unwrap_or_default()
    );

    html!(
        <li class="pf-v5-c-nav__item">
            <Link<CalibrationRoute> to={props.to.clone()} classes="pf-v5-c-nav__link">
                { caption }
            </Link<CalibrationRoute>>
        </li>
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn instrument_route_has_no_placeable() {
        let route = CalibrationRoute::recognize("/calibrate/pipette-200ul").unwrap();
        assert_eq!(
            route,
            CalibrationRoute::Instrument {
                instrument: "pipette-200ul".into()
            }
        );
        assert_eq!(route.placeable(), None);
    }

    #[test]
    fn placeable_route_binds_both_parameters() {
        let route = CalibrationRoute::recognize("/calibrate/pipette-200ul/tiprack-1").unwrap();
        assert_eq!(route.instrument(), "pipette-200ul");
        assert_eq!(route.placeable(), Some("tiprack-1"));
    }

    #[test]
    fn unrelated_paths_resolve_nothing() {
        assert_eq!(CalibrationRoute::recognize("/settings"), None);
        assert_eq!(CalibrationRoute::recognize("/calibrate"), None);
        assert_eq!(CalibrationRoute::recognize("/calibrate/a/b/c"), None);
    }

    #[test]
    fn renders_paths() {
        let route = CalibrationRoute::Placeable {
            instrument: "p200".into(),
            placeable: "plate".into(),
        };
        assert_eq!(route.to_path(), "/calibrate/p200/plate");
        assert_eq!(CalibrationRoute::recognize(&route.to_path()), Some(route));
    }

    #[test]
    fn patterns_are_registered_once() {
        let routes = CalibrationRoute::routes();
        assert_eq!(routes.len(), 2);

        let normalized = routes
            .iter()
            .map(|pattern| {
                pattern
                    .split('/')
                    .filter(|segment| !segment.is_empty())
                    .collect::<Vec<_>>()
            })
            .collect::<HashSet<_>>();
        assert_eq!(normalized.len(), routes.len());
    }
}
