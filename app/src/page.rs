use patternfly_yew::prelude::*;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::app::CalibrationRoute;

#[derive(Clone, Debug, Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    /// Route the header links back to.
    #[prop_or_default]
    pub parent: Option<CalibrationRoute>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ViewPage)]
pub fn view_page(props: &Props) -> Html {
    let parent = props.parent.clone().map(|to| {
        let caption = format!("Back to {}", to.instrument());
        html!(<Link<CalibrationRoute> {to}>{ caption }</Link<CalibrationRoute>>)
    });

    html! (
        <PageSectionGroup>
            <PageSection
                r#type={PageSectionType::Default}
                variant={PageSectionVariant::Light}
                limit_width=true
                sticky={[PageSectionSticky::Top]}
            >
                <Content>
                    <Title size={Size::XXLarge}>
                        { props.title.clone() }
                    </Title>
                    { for parent }
                </Content>
            </PageSection>

            { for props.children.iter().map(|child|{
                html!(<PageSection>{child}</PageSection>)
            })}
        </PageSectionGroup>
    )
}
