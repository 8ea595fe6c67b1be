//! Short link creation service.

use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::domain::entities::{NewLink, ShortenedLink, short_link_url};
use crate::domain::form::{CreateLinkForm, FieldErrors, validate_original_url};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, ID_RESERVED};
use crate::utils::identifier::IdentifierGenerator;

/// Attempts made by [`LinkService::create_with_generated_path`] before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service implementing the "create shortened URL" flow.
///
/// Validates the form locally, calls the repository, and classifies the
/// outcome. A form with field errors never reaches the repository.
pub struct LinkService<L: LinkRepository> {
    repository: Arc<L>,
    base_url: String,
    generator: Mutex<IdentifierGenerator<StdRng>>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service with an OS-seeded path generator.
    pub fn new(repository: Arc<L>, base_url: impl Into<String>) -> Self {
        Self::with_generator(
            repository,
            base_url,
            IdentifierGenerator::with_rng(StdRng::from_os_rng()),
        )
    }

    /// Creates a new link service with the given path generator.
    pub fn with_generator(
        repository: Arc<L>,
        base_url: impl Into<String>,
        generator: IdentifierGenerator<StdRng>,
    ) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
            generator: Mutex::new(generator),
        }
    }

    /// Creates a short link from a submitted form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any field is invalid (no request is made).
    /// Returns [`AppError::IdReserved`] if the custom path is already taken.
    /// Returns [`AppError::Unhandled`] for every other remote failure.
    pub async fn create_short_link(&self, form: CreateLinkForm) -> Result<ShortenedLink, AppError> {
        form.validate().map_err(AppError::Validation)?;

        let requested_path = form.custom_url_path.clone();
        let new_link = NewLink {
            original_url: form.original_url,
            custom_url_path: form.custom_url_path,
        };

        tracing::debug!(
            original_url = %new_link.original_url,
            custom_url_path = ?new_link.custom_url_path,
            "Creating short link"
        );

        match self.repository.create(new_link).await {
            Ok(link) => {
                tracing::info!(shortened_url = %link.shortened_url, "Short link created");
                Ok(link)
            }
            Err(e) if e.has_message(ID_RESERVED) => {
                let path = requested_path.unwrap_or_default();
                tracing::warn!(%path, "Custom path already reserved");
                Err(AppError::IdReserved { path })
            }
            Err(e) => {
                tracing::warn!(error = %e, "Short link creation failed");
                Err(AppError::Unhandled(e))
            }
        }
    }

    /// Creates a short link on a locally generated random path.
    ///
    /// Generates a fresh path and retries whenever the service reports it as
    /// reserved, up to [`MAX_GENERATION_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is invalid.
    /// Returns [`AppError::PathsExhausted`] if every generated path collided.
    /// Returns [`AppError::Unhandled`] for any other remote failure.
    pub async fn create_with_generated_path(
        &self,
        original_url: impl Into<String>,
    ) -> Result<ShortenedLink, AppError> {
        let original_url = original_url.into();

        if let Err(e) = validate_original_url(&original_url) {
            return Err(AppError::Validation(FieldErrors {
                original_url: Some(e),
                custom_url_path: None,
            }));
        }

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let form = CreateLinkForm::new(original_url.clone()).with_custom_path(self.next_path());

            match self.create_short_link(form).await {
                Err(AppError::IdReserved { path }) => {
                    tracing::debug!(%path, attempt, "Generated path collided, retrying");
                }
                result => return result,
            }
        }

        Err(AppError::PathsExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }

    /// Returns the display URL of `path` under the configured base URL.
    pub fn short_url(&self, path: &str) -> String {
        short_link_url(&self.base_url, path)
    }

    /// Draws the next candidate path from the generator.
    fn next_path(&self) -> String {
        let mut generator = self
            .generator
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        generator.generate()
    }
}
