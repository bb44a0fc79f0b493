//! Maven `pom.xml` parsing.

use quick_xml::events::Event;
use quick_xml::Reader as XmlReader;
use std::collections::BTreeMap;

#[derive(Default)]
struct PendingDependency {
    depth: usize,
    artifact_id: Option<String>,
    version: Option<String>,
}

/// Collect every `<dependency>` in the document as artifactId → version.
///
/// Dependencies are found at any depth, so `dependencyManagement` and plugin
/// dependencies are included. Elements are matched by local name, which
/// accepts both the Maven 4.0.0 namespace and un-namespaced POMs.
/// Property references such as `${spring.version}` are kept verbatim.
pub fn parse_pom(content: &str) -> Result<BTreeMap<String, Option<String>>, quick_xml::Error> {
    let mut reader = XmlReader::from_str(content);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut path: Vec<String> = Vec::new();
    let mut pending: Option<PendingDependency> = None;
    let mut deps = BTreeMap::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                path.push(name);
                if path.last().map(String::as_str) == Some("dependency") {
                    pending = Some(PendingDependency {
                        depth: path.len(),
                        ..Default::default()
                    });
                }
            }
            Event::Text(e) => {
                // Only direct children of <dependency>; skips <exclusion> ids.
                if let Some(dep) = pending.as_mut().filter(|d| path.len() == d.depth + 1) {
                    let text = e.unescape()?.trim().to_string();
                    match path.last().map(String::as_str) {
                        Some("artifactId") => dep.artifact_id = Some(text),
                        Some("version") => dep.version = Some(text),
                        _ => {}
                    }
                }
            }
            Event::End(ref e) => {
                let closing = e.local_name();
                if closing.as_ref() == b"dependency" {
                    if let Some(dep) = pending.take() {
                        match dep.artifact_id {
                            Some(artifact) if !artifact.is_empty() => {
                                deps.insert(artifact, dep.version.filter(|v| !v.is_empty()));
                            }
                            _ => tracing::debug!("Skipping pom dependency without artifactId"),
                        }
                    }
                }
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(deps)
}
