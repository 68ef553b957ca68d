//! Component templates and positional placeholder rendering.
//!
//! Templates use `{0}`, `{1}`, ... placeholders. Rendering replaces every
//! occurrence of each index in turn; values are inserted verbatim.

use crate::conventions::{Language, StyleDialect};
use crate::naming::ComponentName;

/// The per-component files rendered from a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Component body. `{0}` = identifier, `{1}` = style extension.
    Component,
    /// Storybook story. `{0}` = identifier.
    Story,
    /// Component test. `{0}` = identifier.
    Test,
    /// Per-component index. `{0}` = identifier.
    Index,
}

impl TemplateKind {
    /// Template text for this kind and language.
    pub fn template(self, language: Language) -> &'static str {
        match (self, language) {
            (TemplateKind::Component, Language::Typed) => COMPONENT_TS,
            (TemplateKind::Component, Language::Untyped) => COMPONENT_JS,
            (TemplateKind::Story, Language::Typed) => STORY_TS,
            (TemplateKind::Story, Language::Untyped) => STORY_JS,
            (TemplateKind::Test, Language::Typed) => TEST_TS,
            (TemplateKind::Test, Language::Untyped) => TEST_JS,
            (TemplateKind::Index, Language::Typed) => INDEX_TS,
            (TemplateKind::Index, Language::Untyped) => INDEX_JS,
        }
    }

    /// Render this kind for a component.
    pub fn render(self, language: Language, name: &ComponentName, style: StyleDialect) -> String {
        let template = self.template(language);
        match self {
            TemplateKind::Component => render(template, &[name.as_str(), style.ext()]),
            TemplateKind::Story | TemplateKind::Test | TemplateKind::Index => {
                render(template, &[name.as_str()])
            }
        }
    }
}

/// Replace `{i}` with `values[i]` for each index, in order.
pub fn render(template: &str, values: &[&str]) -> String {
    let mut result = template.to_string();
    for (index, value) in values.iter().enumerate() {
        let placeholder = format!("{{{}}}", index);
        result = result.replace(&placeholder, value);
    }
    result
}

const COMPONENT_TS: &str = r#"import React from "react"
import "./{0}.{1}"

export interface {0}Props {
	//complete your custom props here
}

const {0} = (props: {0}Props) => {
	return <></>
}

export default {0}"#;

const COMPONENT_JS: &str = r#"import React from 'react';
import PropTypes from 'prop-types';
import "./{0}.{1}";

export const {0} = ({ ...props }) => {
	return <></>;
};

{0}.propTypes = {
	//Add custom propTypes
};

{0}.defaultProps = {
	//Add default props values
};"#;

const STORY_TS: &str = r#"import React from "react"
import { ComponentStory, ComponentMeta } from "@storybook/react"
import {0} from "./{0}"

export default {
	title: "PorfolioComponentLibrary/{0}",
	component: {0},
} as ComponentMeta<typeof {0}>

const Template: ComponentStory<typeof {0}> = (args) => <{0} {...args} />

//Stories
export const BasicStory = Template.bind({})
BasicStory.args = {
	//Add props values for this story
}"#;

const STORY_JS: &str = r#"import React from 'react';
import { {0} } from './{0}';

export default {
	title: 'PorfolioComponentLibrary/{0}',
	component: {0},
	// More on argTypes: https://storybook.js.org/docs/react/api/argtypes
	argTypes: {
		//Add Custom argTypes here
	},
};

const Template = (args) => <{0} {...args} />;

//Stories
export const BasicStory = Template.bind({});
BasicStory.args = {
	//Add props values for this story
};"#;

const TEST_TS: &str = r#"import React from "react"
import { render } from "@testing-library/react"

import {0} from "./{0}"

describe("{0}", () => {
	test("renders the {0} component", () => {
		render(<{0} />)
	})
})"#;

const TEST_JS: &str = "//javascript component test here";

const INDEX_TS: &str = r#"export { default } from "./{0}""#;

const INDEX_JS: &str = "//javascript index here";
