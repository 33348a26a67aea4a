//! Headless smoke binary: load options, fetch the node list, build the
//! scene, and log a summary. Useful for checking an endpoint and an
//! options file without a render collaborator attached.

use std::path::Path;

use nodeview::nodes::HttpNodeSource;
use nodeview::options::Options;
use nodeview::viewer::Viewer;

fn resolve_options(arg: Option<&str>) -> Result<Options, String> {
    match arg {
        Some(path) => Options::load(Path::new(path))
            .map_err(|e| format!("failed to load options {path}: {e}")),
        None => Ok(Options::default()),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let options = match resolve_options(args.get(1).map(String::as_str)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let endpoint = options.nodes.endpoint.clone();
    let mut viewer = Viewer::new(options, 800, 600);
    viewer.start_loading(HttpNodeSource::new(endpoint));

    // Poll until the one-time fetch resolves; a failed fetch resolves to
    // zero markers and is not an error here.
    loop {
        let frame = viewer.tick();
        if !viewer.is_loading() {
            log::info!(
                "scene: {} line sets, {} meshes, {} markers",
                viewer.scene().line_sets().len(),
                viewer.scene().meshes().len(),
                frame.markers.len()
            );
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(10));
    }
}
