//! Server-rendered widget views.

use std::sync::Arc;

use minijinja::{Environment, Error, ErrorKind, UndefinedBehavior, Value, context};
use rust_embed::Embed;

use super::audio_settings::AudioSettings;
use super::i18n::Catalog;

#[derive(Embed)]
#[folder = "templates/"]
struct Templates;

pub const AUDIO_SETTINGS_TEMPLATE: &str = "widgets/audio_widget_settings.html";

/// Template environment plus the catalog injected as `t`.
#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
    catalog: Arc<Catalog>,
}

impl Views {
    pub fn new(catalog: Catalog) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_loader(load_embedded);
        Self {
            env,
            catalog: Arc::new(catalog),
        }
    }

    pub fn render_audio_settings(&self, settings: &AudioSettings) -> Result<String, Error> {
        let template = self.env.get_template(AUDIO_SETTINGS_TEMPLATE)?;
        template.render(context! {
            settings => settings,
            t => self.translator(),
        })
    }

    fn translator(&self) -> Value {
        let catalog = Arc::clone(&self.catalog);
        Value::from_function(move |key: String| catalog.t(&key))
    }
}

fn load_embedded(name: &str) -> Result<Option<String>, Error> {
    let Some(file) = Templates::get(name) else {
        return Ok(None);
    };
    String::from_utf8(file.data.into_owned()).map(Some).map_err(|e| {
        Error::new(ErrorKind::InvalidOperation, format!("template {name} is not UTF-8"))
            .with_source(e)
    })
}
