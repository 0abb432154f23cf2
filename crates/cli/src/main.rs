//! `tracktor` -- terminal frontend for the production tracker.
//!
//! Drives the client engine end-to-end against a tracktor server: log
//! in, list projects, render the shot/asset tracking tables, edit
//! department statuses, and manage notes and share codes.
//!
//! # Environment variables
//!
//! | Variable                | Required | Default                              | Description            |
//! |-------------------------|----------|--------------------------------------|------------------------|
//! | `TRACKTOR_API_URL`      | no       | `http://localhost:8080`              | Server root URL        |
//! | `TRACKTOR_SESSION_FILE` | no       | `<config dir>/tracktor/session.json` | Persisted session path |
//! | `RUST_LOG`              | no       | `tracktor=warn`                      | Tracing filter         |

mod config;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tracktor_app::creation::{CreateTarget, Created, CreationFlow};
use tracktor_app::engine::{shared_store, submit_status_update, StatusUpdate};
use tracktor_app::item_tabs::ItemTabs;
use tracktor_app::loader::{load_notes, load_project};
use tracktor_app::view::{columns_for, row_views, Column, RowView};
use tracktor_app::{session, Notice, NoticeLevel, Notifier, Session, SessionFile};
use tracktor_core::{Department, Id, ItemKind, Status};
use tracktor_remote::TracktorApi;

use config::ClientConfig;

#[derive(Parser)]
#[command(name = "tracktor", about = "Track shots and assets through production")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an account.
    Signup { username: String, password: String },
    /// Log in and persist the session.
    Login { username: String, password: String },
    /// Forget the persisted session.
    Logout,
    /// List the projects you belong to.
    Projects,
    /// Create a project.
    CreateProject {
        name: String,
        #[arg(long)]
        kind: Option<String>,
        #[arg(long)]
        shots: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
    },
    /// Delete a project and its contents.
    DeleteProject { project: Id },
    /// Render a project's tracking table.
    Show {
        project: Id,
        /// Which tab to render: shots or assets.
        #[arg(long, default_value = "shots")]
        tab: ItemKind,
    },
    /// Set one department status on an item.
    SetStatus {
        project: Id,
        kind: ItemKind,
        item: Id,
        /// Department code: overall, lay, anim, prepro, mod, srf, cfx, lit.
        department: String,
        /// One of: "Not started", WIP, "Ready to Review", Complete, Omitted.
        status: Status,
    },
    /// Inspect one item: its department tabs and statuses.
    Item {
        project: Id,
        kind: ItemKind,
        item: Id,
        /// Department tab to activate (code), defaults to the first.
        #[arg(long)]
        department: Option<String>,
    },
    /// List registered users.
    Users,
    /// Create a shot in a project.
    CreateShot { project: Id, name: String },
    /// Create an asset in a project.
    CreateAsset {
        project: Id,
        name: String,
        kind: String,
    },
    /// List notes for an item department, newest first.
    Notes {
        project: Id,
        kind: ItemKind,
        item: Id,
        department: String,
    },
    /// Add a note to an item department.
    AddNote {
        project: Id,
        kind: ItemKind,
        item: Id,
        department: String,
        body: String,
    },
    /// Generate a share code for a project.
    Share { project: Id },
    /// Join a project by share code.
    Join { code: String },
}

struct CliContext {
    api: TracktorApi,
    sessions: SessionFile,
    notifier: Notifier,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tracktor=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    tracing::debug!(api_url = %config.api_url, "Loaded client configuration");

    let ctx = CliContext {
        api: TracktorApi::new(config.api_url),
        sessions: SessionFile::new(config.session_file),
        notifier: Notifier::default(),
    };
    let mut notices = ctx.notifier.subscribe();

    let outcome = run(cli.command, &ctx).await;
    if outcome.is_ok() {
        drain_notices(&mut notices);
    }
    outcome
}

async fn run(command: Command, ctx: &CliContext) -> anyhow::Result<()> {
    match command {
        Command::Signup { username, password } => {
            session::signup(&ctx.api, &username, &password).await?;
            println!("Account '{username}' created. Log in with `tracktor login`.");
        }

        Command::Login { username, password } => {
            let session = session::login(&ctx.api, &ctx.sessions, &username, &password).await?;
            println!("Logged in as {} (user id {})", session.user_name, session.user_id);
        }

        Command::Logout => {
            session::logout(&ctx.sessions)?;
            println!("Logged out.");
        }

        Command::Projects => {
            let session = require_session(ctx)?;
            let memberships = ctx.api.memberships(session.user_id).await?;
            let projects = ctx.api.list_projects().await?;
            let mine: Vec<_> = projects
                .into_iter()
                .filter(|project| memberships.contains(&project.id))
                .collect();
            if mine.is_empty() {
                println!("No projects yet. Create one with `tracktor create-project`.");
            }
            for project in mine {
                let kind = project.kind.as_deref().unwrap_or("-");
                let deadline = project.deadline.as_deref().unwrap_or("-");
                println!(
                    "{:>5}  {:<24} {:<12} due {}",
                    project.id, project.name, kind, deadline
                );
            }
        }

        Command::CreateProject {
            name,
            kind,
            shots,
            deadline,
        } => {
            let session = require_session(ctx)?;
            let store = shared_store();
            let mut flow = CreationFlow::new();
            flow.open_for(CreateTarget::Project {
                user_id: session.user_id,
            });
            flow.set_field("name", name);
            if let Some(kind) = kind {
                flow.set_field("type", kind);
            }
            if let Some(shots) = shots {
                flow.set_field("shotsNum", shots);
            }
            if let Some(deadline) = deadline {
                flow.set_field("deadline", deadline);
            }
            let created = flow.submit(&ctx.api, &store, &ctx.notifier).await?;
            if let Created::Project(project) = created {
                println!("Created project '{}' with id {}", project.name, project.id);
            }
        }

        Command::DeleteProject { project } => {
            require_session(ctx)?;
            ctx.api.delete_project(project).await?;
            println!("Project {project} deleted.");
        }

        Command::Show { project, tab } => {
            require_session(ctx)?;
            let store = shared_store();
            load_project(&ctx.api, &store, &ctx.notifier, project).await;

            let guard = store.read().await;
            if guard.project().is_not_found() {
                bail!("Project {project} not found");
            }
            let name = guard
                .project()
                .loaded()
                .map(|p| p.name.clone())
                .unwrap_or_default();
            println!("Project: {name} -- {tab}");
            print_table(&columns_for(tab), &row_views(&guard, tab));
        }

        Command::SetStatus {
            project,
            kind,
            item,
            department,
            status,
        } => {
            require_session(ctx)?;
            let department = Department::from_code(&department)?;
            let store = shared_store();
            load_project(&ctx.api, &store, &ctx.notifier, project).await;
            if store.read().await.project().is_not_found() {
                bail!("Project {project} not found");
            }

            submit_status_update(
                &ctx.api,
                &store,
                &ctx.notifier,
                project,
                StatusUpdate {
                    kind,
                    item_id: item,
                    department,
                    value: status,
                },
            )
            .await?;
            println!(
                "{} {} -- {} set to {}",
                kind.singular(),
                item,
                department.label(),
                status
            );
        }

        Command::Item {
            project,
            kind,
            item,
            department,
        } => {
            require_session(ctx)?;
            let tabs = match department {
                Some(code) => ItemTabs::from_query(kind, &format!("department={code}")),
                None => ItemTabs::new(kind),
            };
            match kind {
                ItemKind::Shots => {
                    let shot = ctx.api.fetch_shot(project, item).await?;
                    println!("Shot: {}", shot.name);
                    for dept in tabs.departments() {
                        let marker = if *dept == tabs.active() { "*" } else { " " };
                        println!(" {marker} {:<16} {}", dept.label(), shot.display_status(*dept));
                    }
                }
                ItemKind::Assets => {
                    let asset = ctx.api.fetch_asset(project, item).await?;
                    println!("Asset: {} ({})", asset.name, asset.kind.as_deref().unwrap_or("-"));
                    for dept in tabs.departments() {
                        let marker = if *dept == tabs.active() { "*" } else { " " };
                        println!(" {marker} {:<16} {}", dept.label(), asset.display_status(*dept));
                    }
                }
            }
        }

        Command::Users => {
            require_session(ctx)?;
            for user in ctx.api.list_users().await? {
                println!("{:>5}  {}", user.id, user.name);
            }
        }

        Command::CreateShot { project, name } => {
            require_session(ctx)?;
            let store = shared_store();
            load_project(&ctx.api, &store, &ctx.notifier, project).await;

            let mut flow = CreationFlow::new();
            flow.open_for(CreateTarget::Shot { project_id: project });
            flow.set_field("shot_name", name);
            if let Created::Shot(shot) = flow.submit(&ctx.api, &store, &ctx.notifier).await? {
                println!("Created shot '{}' with id {}", shot.name, shot.id);
            }
        }

        Command::CreateAsset {
            project,
            name,
            kind,
        } => {
            require_session(ctx)?;
            let store = shared_store();
            load_project(&ctx.api, &store, &ctx.notifier, project).await;

            let mut flow = CreationFlow::new();
            flow.open_for(CreateTarget::Asset { project_id: project });
            flow.set_field("asset_name", name);
            flow.set_field("asset_type", kind);
            if let Created::Asset(asset) = flow.submit(&ctx.api, &store, &ctx.notifier).await? {
                println!("Created asset '{}' with id {}", asset.name, asset.id);
            }
        }

        Command::Notes {
            project,
            kind,
            item,
            department,
        } => {
            require_session(ctx)?;
            let department = Department::from_code(&department)?;
            let store = shared_store();
            load_notes(&ctx.api, &store, &ctx.notifier, project, kind, item, department).await;

            let guard = store.read().await;
            if guard.notes().is_not_found() {
                bail!("No such item or department");
            }
            let notes = guard.notes_sorted();
            if notes.is_empty() {
                println!("No {} notes yet.", department.label());
            }
            for note in notes {
                println!("[{}] {}", note.timestamp, note.author);
                println!("    {}", note.body);
            }
        }

        Command::AddNote {
            project,
            kind,
            item,
            department,
            body,
        } => {
            require_session(ctx)?;
            let department = Department::from_code(&department)?;
            let store = shared_store();
            load_notes(&ctx.api, &store, &ctx.notifier, project, kind, item, department).await;

            let mut flow = CreationFlow::new();
            flow.open_for(CreateTarget::Note {
                project_id: project,
                kind,
                item_id: item,
                department,
            });
            flow.set_field("note_body", body);
            if let Created::Note(note) = flow.submit(&ctx.api, &store, &ctx.notifier).await? {
                println!("Note {} added to {} {}.", note.id, kind.singular(), item);
            }
        }

        Command::Share { project } => {
            require_session(ctx)?;
            let code = ctx.api.share_code(project).await?;
            println!("Share code for project {project}: {code}");
        }

        Command::Join { code } => {
            let session = require_session(ctx)?;
            let project_id = ctx.api.join_project(&code, session.user_id).await?;
            println!("Joined project {project_id}.");
        }
    }

    Ok(())
}

/// The persisted session, or a friendly pointer at `login`.
fn require_session(ctx: &CliContext) -> anyhow::Result<Session> {
    ctx.sessions
        .load()
        .context("Not logged in. Run `tracktor login <username> <password>` first.")
}

/// Print rows under headers, columns padded to their widest cell.
fn print_table(columns: &[Column], rows: &[RowView]) {
    if rows.is_empty() {
        println!("(no rows)");
        return;
    }
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            rows.iter()
                .map(|row| row.cells[index].len())
                .chain(std::iter::once(column.header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| format!("{:<width$}", column.header))
        .collect();
    println!("{}", header.join("  "));

    for row in rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        println!("{}", cells.join("  "));
    }
}

/// Forward accumulated notices to stderr.
fn drain_notices(receiver: &mut tokio::sync::broadcast::Receiver<Notice>) {
    while let Ok(notice) = receiver.try_recv() {
        match notice.level {
            NoticeLevel::Error => eprintln!("error: {}", notice.message),
            NoticeLevel::Info => eprintln!("{}", notice.message),
        }
    }
}
