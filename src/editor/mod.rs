//! Deferred loading for the rich-text editor used by the admin screens.
//!
//! The editor bundle is heavy, so nothing is constructed until the first
//! render request. Until the loader finishes every render yields a placeholder;
//! afterwards renders go straight to the loaded editor. The loader runs at most
//! once, and a failed load stays failed.

use std::sync::{Arc, Mutex};

use futures::future::{BoxFuture, FutureExt};
use tokio::runtime::Handle;
use tokio::sync::{Notify, OnceCell};

pub const LOADING_TEXT: &str = "Loading editor...";

/// Inputs the host page passes on each render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorProps {
    pub value: String,
    pub placeholder: Option<String>,
    pub read_only: bool,
}

pub trait RichTextEditor: Send + Sync {
    fn render(&self, props: &EditorProps) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Placeholder(String),
    Ready(String),
    Failed(String),
}

pub type EditorLoader = Box<dyn FnOnce() -> BoxFuture<'static, anyhow::Result<Box<dyn RichTextEditor>>> + Send>;

type LoadOutcome = Result<Box<dyn RichTextEditor>, String>;

pub struct DeferredEditor {
    loader: Mutex<Option<EditorLoader>>,
    outcome: Arc<OnceCell<LoadOutcome>>,
    loaded: Arc<Notify>,
}

impl DeferredEditor {
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = anyhow::Result<Box<dyn RichTextEditor>>> + Send + 'static,
    {
        let loader: EditorLoader = Box::new(move || loader().boxed());
        Self {
            loader: Mutex::new(Some(loader)),
            outcome: Arc::new(OnceCell::new()),
            loaded: Arc::new(Notify::new()),
        }
    }

    /// Whether the loader has been started yet
    pub fn is_started(&self) -> bool {
        self.outcome.initialized() || self.lock_loader().is_none()
    }

    /// Render with the loaded editor, kicking off the load on first call.
    /// Outside a tokio runtime the load cannot start; that render reports
    /// `Failed` and the loader stays available for a later call.
    pub fn render(&self, props: &EditorProps) -> Rendered {
        match self.outcome.get() {
            Some(Ok(editor)) => Rendered::Ready(editor.render(props)),
            Some(Err(message)) => Rendered::Failed(message.clone()),
            None => match self.start_loading() {
                Ok(()) => Rendered::Placeholder(LOADING_TEXT.to_string()),
                Err(message) => Rendered::Failed(message),
            },
        }
    }

    /// Start the load if needed and wait for it to settle
    pub async fn wait_until_loaded(&self) {
        loop {
            let notified = self.loaded.notified();
            if self.outcome.initialized() {
                return;
            }
            if let Err(message) = self.start_loading() {
                tracing::error!("Editor failed to load: {}", message);
                return;
            }
            notified.await;
        }
    }

    fn start_loading(&self) -> Result<(), String> {
        let mut slot = self.lock_loader();
        if slot.is_none() {
            return Ok(());
        }
        let handle = Handle::try_current().map_err(|e| format!("Editor cannot load without a runtime: {}", e))?;
        let Some(loader) = slot.take() else {
            return Ok(());
        };
        drop(slot);

        let outcome = self.outcome.clone();
        let loaded = self.loaded.clone();
        handle.spawn(async move {
            let result = loader().await.map_err(|e| {
                tracing::error!("Editor failed to load: {:#}", e);
                e.to_string()
            });
            let _ = outcome.set(result);
            loaded.notify_waiters();
        });
        Ok(())
    }

    fn lock_loader(&self) -> std::sync::MutexGuard<'_, Option<EditorLoader>> {
        self.loader.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Plain `<textarea>` editor, for hosts that do not ship the full bundle
#[derive(Debug, Default)]
pub struct TextareaEditor;

impl RichTextEditor for TextareaEditor {
    fn render(&self, props: &EditorProps) -> String {
        let mut attrs = String::new();
        if let Some(placeholder) = &props.placeholder {
            attrs.push_str(&format!(" placeholder=\"{}\"", escape_html(placeholder)));
        }
        if props.read_only {
            attrs.push_str(" readonly");
        }
        format!("<textarea{}>{}</textarea>", attrs, escape_html(&props.value))
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
