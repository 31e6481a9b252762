use edsim_core::{FormValues, Hospital, SubmissionSnapshot};
use edsim_metrics::ValidationReport;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::RenderError;
use crate::styles::RenderStyle;
use crate::templates;
use crate::views::{FormView, SelectionView};

/// Everything the data entry screen shows at one moment.
#[derive(Debug, Clone, Copy)]
pub struct FormScreen<'a> {
    pub hospital: &'a Hospital,
    pub values: &'a FormValues,
    pub report: &'a ValidationReport,
    pub snapshot: Option<&'a SubmissionSnapshot>,
    pub banner: bool,
}

#[derive(Serialize)]
struct FeatureCard {
    title: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
struct WelcomeView {
    features: [FeatureCard; 3],
}

/// Renders screens to terminal text.
pub struct Renderer {
    tera: Tera,
    style: RenderStyle,
}

impl Renderer {
    pub fn new(style: RenderStyle) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("welcome.txt", templates::WELCOME),
            ("selection.txt", templates::SELECTION),
            ("preview.txt", templates::PREVIEW),
            ("results.txt", templates::RESULTS),
            ("form.txt", templates::FORM),
        ])
        .map_err(|e| RenderError::TemplateParse(e.to_string()))?;

        Ok(Self { tera, style })
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn welcome(&self) -> Result<String, RenderError> {
        let view = WelcomeView {
            features: [
                FeatureCard {
                    title: "5 Hospitals",
                    description: "Track data across different facility types",
                },
                FeatureCard {
                    title: "7 Key Metrics",
                    description: "Comprehensive data input system",
                },
                FeatureCard {
                    title: "Visual Analytics",
                    description: "Instant metric visualization",
                },
            ],
        };
        self.render("welcome.txt", &view)
    }

    pub fn selection(&self, hospitals: &[Hospital]) -> Result<String, RenderError> {
        self.render("selection.txt", &SelectionView::build(hospitals, &self.style))
    }

    pub fn form(&self, screen: &FormScreen<'_>) -> Result<String, RenderError> {
        let view = FormView::build(
            screen.hospital,
            screen.values,
            screen.report,
            screen.snapshot,
            screen.banner,
            &self.style,
        );
        self.render("form.txt", &view)
    }

    fn render<T: Serialize>(&self, template_name: &str, view: &T) -> Result<String, RenderError> {
        // Convert the view to a Tera context via serde_json
        let value = serde_json::to_value(view)?;
        let context = Context::from_value(value)
            .map_err(|e| RenderError::TemplateRender(e.to_string()))?;

        let rendered = self.tera.render(template_name, &context)?;
        tracing::trace!(template = template_name, bytes = rendered.len(), "rendered screen");
        Ok(rendered)
    }
}
