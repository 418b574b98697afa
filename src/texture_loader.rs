use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use exif::{In, Reader, Tag, Value};
use tracing::{debug, info, warn};
use crate::error::KeepsakeError;
use crate::photos::PhotoSet;

const PHOTO_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

// --- Helper: Load and Sort Image Paths ---
/// Photo files directly inside `dir_path`, sorted by file name. A
/// directory without photos yields an empty list.
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>, KeepsakeError> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path).map_err(|e| KeepsakeError::io(dir_path, e))?;

    for entry in entries {
        let path = entry.map_err(|e| KeepsakeError::io(dir_path, e))?.path();
        if path.is_file() && has_photo_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        warn!("No image files found in {:?}", dir_path);
    }
    Ok(paths)
}

fn has_photo_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| PHOTO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// EXIF orientation tag of a JPEG, if it has one.
pub fn exif_orientation(bytes: &[u8]) -> Option<u16> {
    let exif = Reader::new().read_from_container(&mut Cursor::new(bytes)).ok()?;
    let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
    match &field.value {
        Value::Short(values) => values.first().copied(),
        _ => None,
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, KeepsakeError> {
    let file_bytes = fs::read(image_path).map_err(|e| KeepsakeError::io(image_path, e))?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes).unwrap_or(1)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| KeepsakeError::Decode { path: image_path.to_path_buf(), reason: e.to_string() })?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Flipped orientations are drawn as stored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("Rotated {:?} for EXIF orientation {}", image_path, orientation);
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| KeepsakeError::Decode { path: image_path.to_path_buf(), reason: e.to_string() })
}

/// Photos of the page, loaded one per frame so the window stays responsive.
pub struct PhotoLibrary {
    paths: Vec<PathBuf>,
    textures: Vec<Option<Texture2D>>,
    set: PhotoSet,
}

impl PhotoLibrary {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        let count = paths.len();
        info!("Found {} photos", count);
        Self {
            textures: (0..count).map(|_| None).collect(),
            set: PhotoSet::pending(count),
            paths,
        }
    }

    pub fn set(&self) -> &PhotoSet {
        &self.set
    }

    pub fn texture(&self, slot: usize) -> Option<&Texture2D> {
        self.textures.get(slot).and_then(|t| t.as_ref())
    }

    /// Loads the next pending photo. Returns `false` once all are settled.
    pub fn load_next(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> bool {
        let Some(slot) = self.set.next_pending() else {
            return false;
        };
        match load_texture_with_exif_rotation(rl, thread, &self.paths[slot]) {
            Ok(texture) => {
                self.set.mark_loaded(slot, texture.width() as f32, texture.height() as f32);
                self.textures[slot] = Some(texture);
            }
            Err(e) => {
                warn!("Skipping photo: {}", e);
                self.set.mark_failed(slot);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn lists_photos_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.JPG", "a.png", "notes.txt", "c.gif"] {
            File::create(dir.path().join(name)).unwrap();
        }
        fs::create_dir(dir.path().join("d.jpg")).unwrap();

        let paths = load_sorted_image_paths(dir.path()).unwrap();
        let names: Vec<&str> = paths.iter().map(|p| p.file_name().unwrap().to_str().unwrap()).collect();
        assert_eq!(names, vec!["a.png", "b.JPG", "c.gif"]);
    }

    #[test]
    fn empty_directory_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_sorted_image_paths(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = load_sorted_image_paths(&missing).unwrap_err();
        assert!(matches!(err, KeepsakeError::Io { .. }));
    }

    #[test]
    fn garbage_has_no_orientation() {
        assert_eq!(exif_orientation(b"not a jpeg"), None);
    }
}
