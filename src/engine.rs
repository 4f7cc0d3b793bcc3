//! The request pipeline.
//!
//! [`StyleEngine`] owns everything one site needs: the option store, the
//! template registry, the CSS cache, and the action token signer. Reads
//! go store → resolver → composer (through the cache); writes go
//! token check → store → cache invalidation, in that order, before
//! returning.

use std::fs;
use std::path::Path;

use rand::Rng;

use crate::cache::{cache_key, CssCache, DiskCache, MemoryCache, DEFAULT_TTL_SECONDS};
use crate::config::RossConfig;
use crate::css::{CssComposer, Stylesheet};
use crate::error::{Result, RossError};
use crate::options::{
    FileStore, FormSubmission, OptionSet, OptionStore, ResetRequest, Scope, ScopedOptions,
};
use crate::registry::{Registry, Template};
use crate::resolve::{OptionResolver, ResolvedStyleSet};
use crate::security::{TokenSigner, APPLY_TEMPLATE_ACTION};

/// Header option naming the active template.
pub const TEMPLATE_OPTION: &str = "header_template";

/// Engine behavior that comes from configuration.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Template used when none is stored.
    pub default_template: Option<String>,
    /// Cache entry lifetime.
    pub ttl_seconds: u64,
    /// `id` of the injected `<style>` element.
    pub style_id: String,
    /// Emit compact CSS.
    pub minify: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_template: None,
            ttl_seconds: DEFAULT_TTL_SECONDS,
            style_id: "ross-dynamic-css".to_string(),
            minify: false,
        }
    }
}

impl EngineSettings {
    /// Settings from a loaded config.
    pub fn from_config(config: &RossConfig) -> Self {
        Self {
            default_template: config.default_template.clone(),
            ttl_seconds: config.cache.ttl_seconds,
            style_id: config.css.style_id.clone(),
            minify: config.css.minify,
        }
    }
}

/// Resolves, composes, caches, and mutates one site's styles.
pub struct StyleEngine<S: OptionStore> {
    store: S,
    registry: Registry,
    composer: CssComposer,
    cache: Option<Box<dyn CssCache>>,
    signer: TokenSigner,
    settings: EngineSettings,
}

impl<S: OptionStore> StyleEngine<S> {
    /// Create an engine without a cache.
    pub fn new(store: S, registry: Registry, signer: TokenSigner, settings: EngineSettings) -> Self {
        Self {
            store,
            registry,
            composer: CssComposer::new(),
            cache: None,
            signer,
            settings,
        }
    }

    /// Attach a CSS cache.
    pub fn with_cache(mut self, cache: Box<dyn CssCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Replace the composer.
    pub fn with_composer(mut self, composer: CssComposer) -> Self {
        self.composer = composer;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn cache(&self) -> Option<&dyn CssCache> {
        self.cache.as_deref()
    }

    /// Token for an action, for embedding in admin forms.
    pub fn token(&self, action: &str) -> String {
        self.signer.token(action)
    }

    /// Read every scope from the store.
    pub fn options(&self) -> Result<ScopedOptions> {
        self.store.load_all()
    }

    /// Id of the template that supplies header defaults.
    ///
    /// A stored `header_template` wins, then the configured default, then
    /// the registry default. Unknown ids fall through with a warning.
    pub fn active_template_id(&self, options: &ScopedOptions) -> &str {
        self.active_template(options).id.as_str()
    }

    fn active_template(&self, options: &ScopedOptions) -> &Template {
        let stored = options
            .header
            .get(TEMPLATE_OPTION)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty());
        let configured = self.settings.default_template.as_deref();

        for candidate in [stored, configured].into_iter().flatten() {
            match self.registry.get(candidate) {
                Some(template) => return template,
                None => tracing::warn!(
                    "Unknown template '{}', falling back",
                    candidate
                ),
            }
        }
        self.registry.default_template()
    }

    /// Resolve given options against the active template.
    pub fn resolve_options(&self, options: &ScopedOptions) -> ResolvedStyleSet {
        OptionResolver::new(Some(self.active_template(options)), options).resolve()
    }

    /// Resolve the stored options.
    pub fn resolve(&self) -> Result<ResolvedStyleSet> {
        Ok(self.resolve_options(&self.options()?))
    }

    /// Compose the stylesheet without touching the cache.
    pub fn compose(&self) -> Result<Stylesheet> {
        Ok(self.composer.compose(&self.resolve()?))
    }

    fn serialize(&self, sheet: &Stylesheet) -> String {
        if self.settings.minify {
            sheet.to_minified_css()
        } else {
            sheet.to_css()
        }
    }

    /// The site's CSS, from cache when possible.
    pub fn render_css(&self) -> Result<String> {
        let options = self.options()?;
        let template = self.active_template(&options);

        let Some(cache) = &self.cache else {
            let styles = OptionResolver::new(Some(template), &options).resolve();
            return Ok(self.serialize(&self.composer.compose(&styles)));
        };

        let variant = if self.settings.minify {
            format!("{}+min", template.id)
        } else {
            template.id.clone()
        };
        let key = cache_key(&variant, &options);

        if let Some(css) = cache.get(&key) {
            tracing::debug!("CSS cache hit {}", &key[..12]);
            return Ok(css);
        }

        tracing::debug!("CSS cache miss {}", &key[..12]);
        let styles = OptionResolver::new(Some(template), &options).resolve();
        let css = self.serialize(&self.composer.compose(&styles));
        cache.set(&key, &css, self.settings.ttl_seconds);
        Ok(css)
    }

    /// Compose fresh CSS, bypassing the cache entirely.
    pub fn render_css_uncached(&self) -> Result<String> {
        Ok(self.serialize(&self.compose()?))
    }

    /// The site's CSS wrapped in a `<style>` element.
    pub fn style_tag(&self) -> Result<String> {
        let css = self.render_css()?;
        Ok(Stylesheet::style_tag(&self.settings.style_id, &css))
    }

    /// Drop every cached stylesheet. Returns how many were removed.
    pub fn invalidate(&self) -> usize {
        match &self.cache {
            Some(cache) => {
                let removed = cache.invalidate_all();
                tracing::debug!("Invalidated {} cached stylesheets", removed);
                removed
            }
            None => 0,
        }
    }

    /// Replace one scope's options after verifying the token.
    pub fn save_options(
        &mut self,
        scope: Scope,
        options: OptionSet,
        token: Option<&str>,
    ) -> Result<()> {
        self.signer.verify(&scope.save_action(), token)?;
        self.store.set_options(scope, options)?;
        self.invalidate();
        tracing::info!("Saved {} options", scope);
        Ok(())
    }

    /// Handle a submitted admin form body.
    ///
    /// Returns the scope that was replaced.
    pub fn save_form(&mut self, body: &str) -> Result<Scope> {
        let form = FormSubmission::parse(body)?;
        self.save_options(form.scope, form.options, form.token.as_deref())?;
        Ok(form.scope)
    }

    /// Reset a scope or one of its sections.
    ///
    /// Returns the names of the removed fields.
    pub fn reset(&mut self, request: &ResetRequest) -> Result<Vec<String>> {
        self.signer
            .verify(&request.scope.reset_action(), request.token.as_deref())?;

        let current = self.store.get_options(request.scope)?;
        let (remaining, removed) = request.apply(current)?;

        if request.section.is_none() {
            self.store.delete_options(request.scope)?;
        } else {
            self.store.set_options(request.scope, remaining)?;
        }
        self.invalidate();

        tracing::info!(
            "Reset {} {} ({} fields)",
            request.scope,
            request.section.as_deref().unwrap_or("scope"),
            removed.len()
        );
        Ok(removed)
    }

    /// Make a template active.
    ///
    /// With `reset_fields`, stored header values the template provides a
    /// default for are removed so the template's look shows through.
    /// Returns the names of the removed fields.
    pub fn apply_template(
        &mut self,
        id: &str,
        token: Option<&str>,
        reset_fields: bool,
    ) -> Result<Vec<String>> {
        self.signer.verify(APPLY_TEMPLATE_ACTION, token)?;

        let template = self
            .registry
            .get(id)
            .ok_or_else(|| RossError::UnknownTemplate {
                name: id.to_string(),
            })?;
        let provided = if reset_fields {
            template.provided_fields()
        } else {
            Vec::new()
        };

        let mut header = self.store.get_options(Scope::Header)?;
        let removed: Vec<String> = provided
            .into_iter()
            .filter(|field| header.remove(field).is_some())
            .collect();
        header.insert(TEMPLATE_OPTION.to_string(), id.into());

        self.store.set_options(Scope::Header, header)?;
        self.invalidate();

        tracing::info!("Applied template {} ({} fields reset)", id, removed.len());
        Ok(removed)
    }
}

impl StyleEngine<FileStore> {
    /// Open the engine for a project using its configuration.
    pub fn open(project_root: &Path, config: &RossConfig) -> Result<Self> {
        let registry = Registry::builtin()?;
        let store = FileStore::new(config.options_dir(project_root));

        let secret = match &config.security.secret {
            Some(secret) => secret.clone(),
            None => load_or_create_secret(&config.data_dir(project_root))?,
        };

        let mut engine = Self::new(
            store,
            registry,
            TokenSigner::new(secret),
            EngineSettings::from_config(config),
        );

        if config.cache.enabled {
            let cache: Box<dyn CssCache> = if config.cache.disk {
                Box::new(DiskCache::new(config.cache_dir(project_root)))
            } else {
                Box::new(MemoryCache::new())
            };
            engine = engine.with_cache(cache);
        }

        Ok(engine)
    }
}

const SECRET_LENGTH: usize = 48;

/// Write a file only the owner can read.
#[cfg(unix)]
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on create
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(contents.as_bytes())
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    fs::write(path, contents)
}

/// Read the generated site secret, creating it on first use.
fn load_or_create_secret(data_dir: &Path) -> Result<String> {
    let path = data_dir.join("secret");
    if let Ok(existing) = fs::read_to_string(&path) {
        let existing = existing.trim();
        if !existing.is_empty() {
            return Ok(existing.to_string());
        }
    }

    tracing::warn!(
        "No security.secret configured, generating one at {}",
        path.display()
    );

    let secret: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(SECRET_LENGTH)
        .map(char::from)
        .collect();

    fs::create_dir_all(data_dir)?;
    write_private(&path, &secret)?;
    Ok(secret)
}
