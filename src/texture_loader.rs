use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use tracing::debug;

use crate::error::AssetError;

/// Quarter turns needed to display an image upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Half,
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    // 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW.
    // Mirrored orientations (2, 4, 5, 7) are shown unrotated.
    pub fn from_orientation(orientation: u16) -> Self {
        match orientation {
            3 => Rotation::Half,
            6 => Rotation::Clockwise,
            8 => Rotation::CounterClockwise,
            _ => Rotation::None,
        }
    }
}

/// Sub-directory of the assets directory that holds downloaded remote images.
pub const REMOTE_CACHE_DIR: &str = "remote";

/// Where an image URL's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A site-relative URL mapped under the assets directory.
    Local(PathBuf),
    /// An `http(s)` URL. `cache` is the file it is stored in when an assets
    /// directory is configured; `name` carries the image extension.
    Remote { url: String, name: String, cache: Option<PathBuf> },
}

impl ImageSource {
    /// Extension used to pick the decoder.
    pub fn extension(&self) -> Result<String, AssetError> {
        match self {
            ImageSource::Local(path) => image_extension(path),
            ImageSource::Remote { name, .. } => image_extension(Path::new(name)),
        }
    }
}

/// Maps an image URL to where it can be loaded from.
///
/// Remote URLs always resolve; site-relative URLs need an assets directory.
/// Paths escaping the directory resolve to `None`.
pub fn resolve_asset(assets_dir: Option<&Path>, image_url: &str) -> Option<ImageSource> {
    let url = match image_url.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => image_url.to_string(),
    };
    if url.starts_with("http://") || url.starts_with("https://") {
        let name = remote_cache_name(&url)?;
        let cache = assets_dir.map(|dir| dir.join(REMOTE_CACHE_DIR).join(&name));
        return Some(ImageSource::Remote { url, name, cache });
    }
    if url.contains("://") {
        return None;
    }

    let dir = assets_dir?;
    let relative = url.split(['?', '#']).next().unwrap_or("").trim_start_matches('/');
    if relative.is_empty() || relative.split('/').any(|part| part == "..") {
        return None;
    }
    Some(ImageSource::Local(dir.join(relative)))
}

/// Deterministic file name for a remote image: host, last path segment and
/// query, flattened to `[A-Za-z0-9._-]`. Names without a decodable image
/// extension get `.jpg`, the format image CDNs serve by default.
pub fn remote_cache_name(url: &str) -> Option<String> {
    let rest = url.split_once("://")?.1;
    let rest = rest.split('#').next().unwrap_or("");
    let (location, query) = rest.split_once('?').unwrap_or((rest, ""));
    let (host, path) = location.split_once('/').unwrap_or((location, ""));
    if host.is_empty() {
        return None;
    }
    let file = path.rsplit('/').find(|part| !part.is_empty()).unwrap_or("index");

    let mut name = format!("{host}_{file}");
    if !query.is_empty() {
        name.push('_');
        name.push_str(query);
    }
    let mut name: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    if !query.is_empty() || image_extension(Path::new(&name)).is_err() {
        name.push_str(".jpg");
    }
    Some(name)
}

/// Lowercased extension when it is an image type raylib can decode.
pub fn image_extension(path: &Path) -> Result<String, AssetError> {
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    match ext.as_str() {
        "png" | "jpg" | "jpeg" | "bmp" | "gif" => Ok(ext),
        _ => Err(AssetError::UnsupportedType(path.to_path_buf())),
    }
}

/// Reads the EXIF Orientation tag, if the data carries one.
pub fn orientation_from_bytes(bytes: &[u8]) -> Option<u16> {
    let exif = Reader::new().read_from_container(&mut Cursor::new(bytes)).ok()?;
    let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
    match &field.value {
        Value::Short(values) => values.first().copied(),
        _ => None,
    }
}

/// How image bytes of the given type must be rotated to show upright.
pub fn rotation_for(bytes: &[u8], extension: &str) -> Rotation {
    // EXIF is only reliable in JPEG
    if extension != "jpg" && extension != "jpeg" {
        return Rotation::None;
    }
    match orientation_from_bytes(bytes) {
        Some(orientation) => Rotation::from_orientation(orientation),
        None => {
            debug!("no EXIF orientation, showing as stored");
            Rotation::None
        }
    }
}

/// Reads an image file and works out how it must be rotated.
pub fn read_image(path: &Path) -> Result<(Vec<u8>, String, Rotation), AssetError> {
    let extension = image_extension(path)?;
    let bytes = fs::read(path).map_err(|source| AssetError::Read { path: path.to_path_buf(), source })?;
    let rotation = rotation_for(&bytes, &extension);
    Ok((bytes, extension, rotation))
}

#[cfg(feature = "window")]
pub use self::window::{fetch_client, load_texture};

#[cfg(feature = "window")]
mod window {
    use std::fs;
    use std::time::Duration;

    use anyhow::{Context, Result, bail};
    use raylib::prelude::*;
    use reqwest::blocking::Client;
    use tracing::{info, warn};

    use super::{ImageSource, Rotation, read_image, rotation_for};

    const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

    /// HTTP client used to download remote images once at startup.
    pub fn fetch_client() -> Result<Client> {
        Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")
    }

    fn fetch(client: &Client, url: &str) -> Result<Vec<u8>> {
        let response = client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("failed to fetch {url}"))?;
        let bytes = response.bytes().with_context(|| format!("failed to read body of {url}"))?;
        Ok(bytes.to_vec())
    }

    /// Bytes, extension and rotation for an image source.
    ///
    /// A remote image is read from its cache file when present. Otherwise it is
    /// downloaded with `client` (none means offline) and written to the cache.
    fn image_bytes(source: &ImageSource, client: Option<&Client>) -> Result<(Vec<u8>, String, Rotation)> {
        let (url, cache) = match source {
            ImageSource::Local(path) => return Ok(read_image(path)?),
            ImageSource::Remote { url, cache, .. } => (url, cache),
        };
        if let Some(path) = cache.as_deref().filter(|p| p.is_file()) {
            return Ok(read_image(path)?);
        }
        let Some(client) = client else {
            bail!("{url} is not cached and fetching is disabled");
        };

        let extension = source.extension()?;
        let bytes = fetch(client, url)?;
        info!(url = %url, size = bytes.len(), "fetched remote image");
        if let Some(path) = cache {
            let stored = path
                .parent()
                .map_or(Ok(()), fs::create_dir_all)
                .and_then(|()| fs::write(path, &bytes));
            if let Err(e) = stored {
                warn!(?path, "could not cache image: {e}");
            }
        }
        let rotation = rotation_for(&bytes, &extension);
        Ok((bytes, extension, rotation))
    }

    /// Loads an image, applies its EXIF rotation and uploads it as a texture.
    pub fn load_texture(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        source: &ImageSource,
        client: Option<&Client>,
    ) -> Result<Texture2D> {
        let (bytes, extension, rotation) = image_bytes(source, client)?;

        let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes)
            .with_context(|| format!("failed to decode {source:?}"))?;

        match rotation {
            Rotation::Half => {
                image.rotate_cw();
                image.rotate_cw();
            }
            Rotation::Clockwise => image.rotate_cw(),
            Rotation::CounterClockwise => image.rotate_ccw(),
            Rotation::None => {}
        }

        let texture = rl
            .load_texture_from_image(thread, &image)
            .with_context(|| format!("failed to create texture for {source:?}"))?;

        Ok(texture)
    }
}
