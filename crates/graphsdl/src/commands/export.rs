use anyhow::Context;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphsdl::ast;
use libgraphsdl::graph::Graph;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ExportCmd {
    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for graph \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graph_file_exts: Vec<String>,

    #[arg(
        help="Export the graph as-is, without stripping introspection and \
             federation members first.",
        long,
    )]
    no_strip: bool,

    #[arg(
        help="Write the exported SDL to this file instead of stdout.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,

    #[arg(
        help="Paths to one or more JSON graph files or directories containing \
             JSON graph files which should be exported together.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ExportCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (file_paths, mut errors) = self.find_graph_files();

        let mut graphs = vec![];
        for path in &file_paths {
            match load_graph(path) {
                Ok(graph) => graphs.push(graph),
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors loading graphs:\n{}",
                output_utils::RED_X,
                format_errors(&errors),
            ));
        }

        let sdl = match self.export(graphs) {
            Ok(sdl) => sdl,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Error exporting SDL: {e:#}",
                output_utils::RED_X,
            )),
        };

        match &self.output {
            None => CommandResult::stdout(format_args!("{}", sdl.trim_end())),
            Some(output_path) => match std::fs::write(output_path, &sdl) {
                Ok(()) => CommandResult::stdout(format_args!(
                    "{} Exported {} graph files to {output_path:#?}.",
                    output_utils::GREEN_CHECK,
                    file_paths.len(),
                )),
                Err(e) => CommandResult::stderr(format_args!(
                    "{} Error writing {output_path:#?}: {e}",
                    output_utils::RED_X,
                )),
            },
        }
    }
}

impl ExportCmd {
    /// Finds all graph files recursively located at or under each path passed
    /// as an arg.
    fn find_graph_files(&self) -> (Vec<PathBuf>, Vec<anyhow::Error>) {
        let graph_file_exts = normalize_file_exts(&self.graph_file_exts);
        let mut errors = vec![];

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path())
                .follow_links(true)
                .sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                        } else if has_graph_file_ext(path, &graph_file_exts) {
                            log::trace!("Found graph file at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        } else {
                            log::trace!("Skipping non-graph file: {path:#?}.");
                        }
                    },

                    Err(e) => {
                        errors.push(anyhow::Error::new(e).context(format!(
                            "Failed to scan the filesystem at/under {path:#?}",
                        )));
                    },
                }
            }
        }

        // A single file path passed explicitly is always loaded, even when its
        // extension isn't one of --graph-file-exts.
        if file_paths.is_empty()
            && let [single_path] = self.file_or_dir_paths.as_slice()
            && single_path.is_file() {
            log::warn!(
                "Proceeding to export {single_path:#?} even though it doesn't \
                match any of the --graph-file-exts ({}).",
                graph_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(single_path.to_owned());
        }

        log::debug!("Found {} graph files to export.", file_paths.len());
        (file_paths, errors)
    }

    fn export(&self, graphs: Vec<Graph>) -> anyhow::Result<String> {
        let graph = merge_graphs(graphs)?;
        let document =
            if self.no_strip {
                ast::schema::Document {
                    definitions: libgraphsdl::sdl::export_definitions(&graph)?,
                }
            } else {
                libgraphsdl::sdl::get_ast(&graph)?
            };
        Ok(document.to_string())
    }
}

fn load_graph(path: &Path) -> anyhow::Result<Graph> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {path:#?}"))?;
    parse_graph(&contents)
        .with_context(|| format!("Failed to parse a graph from {path:#?}"))
}

pub(super) fn parse_graph(json: &str) -> anyhow::Result<Graph> {
    Ok(serde_json::from_str(json)?)
}

/// Combines graphs in the order given. Data types must be declared only once
/// across all graphs.
pub(super) fn merge_graphs(graphs: Vec<Graph>) -> anyhow::Result<Graph> {
    let num_graphs = graphs.len();
    let merged = graphs.into_iter()
        .try_fold(Graph::new(vec![]), Graph::merge)?;
    log::debug!(
        "Merged {num_graphs} graphs into {} items and {} data types.",
        merged.items().len(),
        merged.data_types().len(),
    );
    Ok(merged)
}

/// Strips any leading `.` so exts compare equal to [`Path::extension`].
pub(super) fn normalize_file_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

pub(super) fn has_graph_file_ext(path: &Path, exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| exts.contains(&*ext.to_string_lossy()))
        .unwrap_or(false)
}

fn format_errors(errors: &[anyhow::Error]) -> String {
    errors.iter()
        .map(|e| format!("  * {e:#}"))
        .collect::<Vec<_>>()
        .join("\n")
}
