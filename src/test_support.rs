use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Two-tree document used as the "before" side of command tests.
pub(crate) const OLD_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<root BTCPP_format="4" main_tree_to_execute="MainTree">
  <BehaviorTree ID="MainTree">
    <Sequence name="main">
      <Fallback>
        <Action ID="OpenGripper" force="1.0"/>
      </Fallback>
      <SubTree ID="Dock" speed="1"/>
      <Delay delay_msec="100">
        <AlwaysSuccess/>
      </Delay>
    </Sequence>
  </BehaviorTree>
  <BehaviorTree ID="Dock">
    <Fallback>
      <Condition ID="IsDocked"/>
      <Action ID="DriveToDock"/>
    </Fallback>
  </BehaviorTree>
</root>
"#;

/// The "after" side: `OpenGripper` moves out of the fallback, the delay and
/// the dock reference change, and the `Dock` tree gains a node.
pub(crate) const NEW_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<root BTCPP_format="4" main_tree_to_execute="MainTree">
  <BehaviorTree ID="MainTree">
    <Sequence name="main">
      <Action ID="OpenGripper" force="1.0"/>
      <SubTree ID="Dock" speed="2"/>
      <Delay delay_msec="250">
        <AlwaysSuccess/>
      </Delay>
    </Sequence>
  </BehaviorTree>
  <BehaviorTree ID="Dock">
    <Fallback>
      <Condition ID="IsDocked"/>
      <Action ID="DriveToDock"/>
      <Action ID="CallForHelp"/>
    </Fallback>
  </BehaviorTree>
</root>
"#;

pub(crate) fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Temp dir holding `old.xml` and `new.xml` with the fixtures above.
pub(crate) fn fixture_pair() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let old = write_file(&dir, "old.xml", OLD_XML);
    let new = write_file(&dir, "new.xml", NEW_XML);
    (dir, old, new)
}
