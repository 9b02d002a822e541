//! Theme client implementation.
//!
//! This module provides the [`ThemeClient`] type. Every operation issues one
//! request through the injected [`HttpTransport`], checks the status codes
//! that carry a fixed meaning, and hands the body to [`decode`].

use serde_json::json;

use crate::clients::theme::ThemeSession;
use crate::clients::{HttpClient, HttpTransport};
use crate::config::{ThemeClientConfig, ThemeId};
use crate::filter::FileFilter;
use crate::rest::path::{asset_path, theme_path, ASSET_KEY_PARAM, SHOP_PATH, THEMES_PATH};
use crate::rest::{
    decode, to_sentence, Asset, AssetEnvelope, AssetsEnvelope, Decoded, Shop, Theme,
    ThemeEnvelope, ThemeError, ThemesEnvelope, LIQUID_SUFFIX, MAIN_ROLE,
};

/// Message fragment returned (with 422) when an upload collides with a
/// compiled `.liquid` shadow.
pub const GENERATED_ASSET_CONFLICT: &str = "Cannot overwrite generated asset";

/// Client for the theme and asset endpoints of one shop.
///
/// The transport and the ignore filter are injected, so tests can run the
/// client against an in-memory transport.
///
/// # Session
///
/// The client starts in the [`ThemeSession`] it was built with. Only
/// [`create_theme`](Self::create_theme) changes it, which is why it is the
/// only operation taking `&mut self`.
///
/// # Example
///
/// ```rust,ignore
/// use theme_client::{NoFilter, ThemeClient, ThemeSession};
/// use theme_client::clients::HttpClient;
///
/// let client = ThemeClient::new(HttpClient::new(&config)?, NoFilter, ThemeSession::Unbound);
/// for key in client.list_asset_keys().await? {
///     println!("{key}");
/// }
/// ```
#[derive(Debug)]
pub struct ThemeClient<T = HttpClient, F = crate::filter::NoFilter> {
    transport: T,
    filter: F,
    session: ThemeSession,
}

impl<F: FileFilter> ThemeClient<HttpClient, F> {
    /// Builds a client on the default [`HttpClient`] transport.
    ///
    /// The client starts bound to `config.theme_id()` when one is set.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Http`] if the transport cannot be created
    /// (e.g. an invalid proxy URL).
    pub fn from_config(config: &ThemeClientConfig, filter: F) -> Result<Self, ThemeError> {
        let transport = HttpClient::new(config)?;
        Ok(Self::new(transport, filter, config.theme_id().into()))
    }
}

impl<T: HttpTransport, F: FileFilter> ThemeClient<T, F> {
    /// Creates a client from its collaborators.
    #[must_use]
    pub const fn new(transport: T, filter: F, session: ThemeSession) -> Self {
        Self {
            transport,
            filter,
            session,
        }
    }

    /// Returns the current session.
    #[must_use]
    pub const fn session(&self) -> ThemeSession {
        self.session
    }

    /// Returns the bound theme id, if any.
    #[must_use]
    pub const fn theme_id(&self) -> Option<ThemeId> {
        self.session.theme_id()
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the shop metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ShopDomainNotFound`] on 404, or a transport/body error.
    pub async fn get_shop(&self) -> Result<Shop, ThemeError> {
        let response = self.transport.get(SHOP_PATH).await?;
        if response.code() == 404 {
            return Err(ThemeError::ShopDomainNotFound);
        }

        decode::<Shop>(&response).into_result()
    }

    /// Lists every theme of the shop.
    ///
    /// # Errors
    ///
    /// Returns a transport or body error.
    pub async fn list_themes(&self) -> Result<Vec<Theme>, ThemeError> {
        let response = self.transport.get(THEMES_PATH).await?;

        decode::<ThemesEnvelope>(&response)
            .into_result()
            .map(|envelope| envelope.themes)
    }

    /// Creates an unpublished theme and binds this client to it.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::ThemeNameRequired`] if `name` is empty; nothing is sent
    /// - [`ThemeError::Validation`] if the server rejects the theme
    /// - [`ThemeError::MalformedResponse`] if the created theme has no id
    pub async fn create_theme(&mut self, name: &str) -> Result<Theme, ThemeError> {
        if name.is_empty() {
            return Err(ThemeError::ThemeNameRequired);
        }

        let theme = Theme {
            name: name.to_string(),
            ..Default::default()
        };
        let response = self
            .transport
            .post(THEMES_PATH, json!({ "theme": theme }))
            .await?;

        let theme = decode::<ThemeEnvelope>(&response).into_result()?.theme;
        let id = theme
            .id
            .and_then(|id| ThemeId::new(id).ok())
            .ok_or(ThemeError::MalformedResponse)?;

        tracing::debug!(theme_id = %id, name, "bound client to newly created theme");
        self.session = ThemeSession::Bound(id);
        Ok(theme)
    }

    /// Fetches the bound theme.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::InfoWithoutThemeId`] when unbound; nothing is sent
    /// - [`ThemeError::ThemeNotFound`] on 404
    pub async fn get_theme_info(&self) -> Result<Theme, ThemeError> {
        let id = self.theme_id().ok_or(ThemeError::InfoWithoutThemeId)?;

        let response = self.transport.get(&theme_path(id)).await?;
        if response.code() == 404 {
            return Err(ThemeError::ThemeNotFound);
        }

        decode::<ThemeEnvelope>(&response)
            .into_result()
            .map(|envelope| envelope.theme)
    }

    /// Makes the bound theme the live theme.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::PublishWithoutThemeId`] when unbound; nothing is sent
    /// - [`ThemeError::ThemeNotFound`] on 404
    /// - [`ThemeError::Validation`] if the server refuses the role change
    pub async fn publish_theme(&self) -> Result<(), ThemeError> {
        let id = self.theme_id().ok_or(ThemeError::PublishWithoutThemeId)?;

        let theme = Theme {
            role: MAIN_ROLE.to_string(),
            ..Default::default()
        };
        let response = self
            .transport
            .put(&theme_path(id), json!({ "theme": theme }))
            .await?;
        if response.code() == 404 {
            return Err(ThemeError::ThemeNotFound);
        }

        decode::<ThemeEnvelope>(&response).into_result().map(|_| ())
    }

    /// Lists the asset keys of the theme, sorted ascending.
    ///
    /// Only keys are requested (`fields=key`), never content. Keys matched by
    /// the filter are dropped, and so is any key immediately followed by its
    /// `.liquid` source: the compiled file is a shadow of that source.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ThemeNotFound`] on 404, or a transport/body error.
    pub async fn list_asset_keys(&self) -> Result<Vec<String>, ThemeError> {
        let path = asset_path(self.theme_id(), &[("fields", "key")]);
        let response = self.transport.get(&path).await?;
        if response.code() == 404 {
            return Err(ThemeError::ThemeNotFound);
        }

        let assets = decode::<AssetsEnvelope>(&response).into_result()?.assets;
        Ok(visible_keys(assets, &self.filter))
    }

    /// Fetches one asset with its content.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NotPartOfTheme`] on 404, or a transport/body error.
    pub async fn get_asset(&self, key: &str) -> Result<Asset, ThemeError> {
        let path = asset_path(self.theme_id(), &[(ASSET_KEY_PARAM, key)]);
        let response = self.transport.get(&path).await?;
        if response.code() == 404 {
            return Err(ThemeError::NotPartOfTheme);
        }

        decode::<AssetEnvelope>(&response)
            .into_result()
            .map(|envelope| envelope.asset)
    }

    /// Uploads a new asset. The API creates and replaces with the same call.
    ///
    /// # Errors
    ///
    /// See [`update_asset`](Self::update_asset).
    pub async fn create_asset(&self, asset: &Asset) -> Result<(), ThemeError> {
        self.update_asset(asset).await
    }

    /// Uploads an asset, replacing any existing content.
    ///
    /// When the server answers 422 with `Cannot overwrite generated asset`,
    /// the `.liquid` source blocking the write is deleted (its outcome is
    /// ignored) and the upload is sent once more. The second answer is final.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::NotPartOfTheme`] on 404
    /// - [`ThemeError::Validation`]; `asset` errors render without the
    ///   attribute prefix
    pub async fn update_asset(&self, asset: &Asset) -> Result<(), ThemeError> {
        let path = asset_path(self.theme_id(), &[]);
        let body = json!({ "asset": asset });
        let mut retried = false;

        loop {
            let response = self.transport.put(&path, body.clone()).await?;
            if response.code() == 404 {
                return Err(ThemeError::NotPartOfTheme);
            }

            let errors = match decode::<AssetEnvelope>(&response) {
                Decoded::FieldErrors(errors) => errors,
                other => return other.into_result().map(|_| ()),
            };

            let Some(messages) = errors.get("asset") else {
                return Err(ThemeError::validation(errors));
            };

            let conflict = response.code() == 422
                && messages
                    .first()
                    .is_some_and(|message| message.contains(GENERATED_ASSET_CONFLICT));
            if conflict && !retried {
                retried = true;
                let shadow = Asset::new(asset.shadow_key());
                tracing::warn!(key = %asset.key, shadow = %shadow.key, "removing generated asset source and retrying upload");
                if let Err(err) = self.delete_asset(&shadow).await {
                    tracing::debug!(key = %shadow.key, error = %err, "ignoring failed shadow delete");
                }
                continue;
            }

            let message = to_sentence(messages);
            return Err(ThemeError::Validation { message, errors });
        }
    }

    /// Deletes an asset.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::MissingAssetName`] if the key is empty (nothing is
    ///   sent) or on 406
    /// - [`ThemeError::CriticalFile`] on 403
    /// - [`ThemeError::NotPartOfTheme`] on 404
    pub async fn delete_asset(&self, asset: &Asset) -> Result<(), ThemeError> {
        if asset.key.is_empty() {
            return Err(ThemeError::MissingAssetName);
        }

        let path = asset_path(self.theme_id(), &[(ASSET_KEY_PARAM, &asset.key)]);
        let response = self.transport.delete(&path).await?;
        match response.code() {
            403 => return Err(ThemeError::CriticalFile),
            404 => return Err(ThemeError::NotPartOfTheme),
            406 => return Err(ThemeError::MissingAssetName),
            _ => {}
        }

        decode::<AssetEnvelope>(&response).into_result().map(|_| ())
    }
}

/// Sorts the listed keys and drops ignored and shadowed ones.
///
/// A key is shadowed when the next key in sorted order is the same key with
/// `.liquid` appended. Only direct neighbours are compared, so a key sorting
/// between `K` and `K.liquid` hides the pair.
fn visible_keys(assets: Vec<Asset>, filter: &impl FileFilter) -> Vec<String> {
    let mut keys: Vec<String> = assets.into_iter().map(|asset| asset.key).collect();
    keys.sort_unstable();

    keys.iter()
        .enumerate()
        .filter(|(index, key)| {
            let shadowed = keys
                .get(index + 1)
                .and_then(|next| next.strip_suffix(LIQUID_SUFFIX))
                .is_some_and(|source| source == key.as_str());
            !shadowed && !filter.is_ignored(key)
        })
        .map(|(_, key)| key.clone())
        .collect()
}
