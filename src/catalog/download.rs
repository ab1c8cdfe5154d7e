//! # Catalog download
//!
//! Fetch the uncompressed `MPCORB.DAT` published by the Minor Planet Center into a
//! per-user cache directory (`<cache>/mpcorb_cache/MPCORB.DAT`). A cached copy is
//! reused unless the caller forces a fresh download.
//!
//! Only available with the `download` cargo feature.
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use directories::BaseDirs;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::{fs::File, io::AsyncWriteExt};
use tokio_stream::StreamExt;
use tracing::info;

use crate::{constants::MPCORB_DAT_URL, mpcorb_errors::MpcorbError};

const CACHE_DIR_NAME: &str = "mpcorb_cache";
const CATALOG_FILE_NAME: &str = "MPCORB.DAT";

/// Stream `url` into `path`, chunk by chunk.
///
/// The body is first written next to `path` with a `.part` suffix and renamed once
/// complete, so an interrupted transfer never looks like a cached catalog.
async fn download_big_file(url: &str, path: &Utf8Path) -> Result<(), MpcorbError> {
    let response = reqwest::get(url).await?.error_for_status()?;

    let pb = match response.content_length() {
        Some(len) => ProgressBar::new(len),
        None => ProgressBar::new_spinner(),
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{bar:40.cyan/blue} {bytes}/{total_bytes} | {bytes_per_sec} | ETA {eta_precise}",
        )
        .map_err(|e| MpcorbError::DownloadFailed(e.to_string()))?,
    );

    let partial = path.with_extension("part");
    let mut file = File::create(&partial).await?;
    info!(%url, "downloading catalog");

    let mut stream = response.bytes_stream();
    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        file.write_all(&chunk).await?;
        pb.inc(chunk.len() as u64);
    }
    file.flush().await?;
    pb.finish_and_clear();

    tokio::fs::rename(&partial, path).await?;
    info!(%path, "catalog downloaded");
    Ok(())
}

/// Default cache directory for the catalog.
pub fn default_cache_dir() -> Result<Utf8PathBuf, MpcorbError> {
    let base_dir = BaseDirs::new().ok_or_else(|| {
        MpcorbError::DownloadFailed("cannot find the user cache directory".to_string())
    })?;
    let cache_path = Utf8Path::from_path(base_dir.cache_dir()).ok_or_else(|| {
        MpcorbError::Utf8PathError(base_dir.cache_dir().to_string_lossy().into_owned())
    })?;
    Ok(cache_path.join(CACHE_DIR_NAME))
}

/// Get a local copy of `MPCORB.DAT`.
///
/// Arguments
/// ---------
/// * `cache_dir`: where to keep the catalog, [`default_cache_dir`] when `None`
/// * `force`: download again even if a cached copy exists
///
/// Return
/// ------
/// * The path to the local catalog file
/// * An error if the cache directory cannot be created or the download fails
pub fn fetch_catalog(cache_dir: Option<&Utf8Path>, force: bool) -> Result<Utf8PathBuf, MpcorbError> {
    let cache_dir = match cache_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_cache_dir()?,
    };
    fs::create_dir_all(&cache_dir)?;

    let local_file = cache_dir.join(CATALOG_FILE_NAME);
    if local_file.exists() && !force {
        info!(path = %local_file, "using cached catalog");
        return Ok(local_file);
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(download_big_file(MPCORB_DAT_URL, &local_file))?;

    Ok(local_file)
}
