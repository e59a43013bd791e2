use super::*;

pub(crate) fn load(path: &Path) -> Result<Vec<StoryNode>> {
  let data = fs::read(path)
    .with_context(|| format!("could not read dump {}", path.display()))?;

  if data.is_empty() {
    return Ok(Vec::new());
  }

  serde_json::from_slice(&data)
    .with_context(|| format!("could not parse dump {}", path.display()))
}

pub(crate) fn save(path: &Path, stories: &[StoryNode]) -> Result {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }

  let serialized = serde_json::to_vec_pretty(stories)?;

  fs::write(path, serialized)
    .with_context(|| format!("could not write dump {}", path.display()))?;

  Ok(())
}
