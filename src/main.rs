use alumni_finder_rust::{cli, config, error, export, finder, matcher, roster};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{AlumniFinderError, Result};
use finder::session::{Credential, CredentialStore};
use finder::snapshot::SnapshotProvider;
use finder::{run_partitioned, Finder, FinderOptions, Pacing};
use indicatif::ProgressBar;
use matcher::synonyms::SynonymMap;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Run {
            roster: roster_path,
            snapshot,
            output,
            format,
            start_row,
            end_row,
            region,
            job_position,
            geolocation,
            workers,
            no_pacing,
            synonyms,
            credentials,
        } => {
            println!("🎓 alumni-finder - roster matching\n");

            // 1. Roster
            println!("[1/4] Reading roster...");
            let range = roster::RowRange { start_row, end_row };
            let records = roster::read_roster(&roster_path, &range)?;
            println!("✔ {} records loaded\n", records.len());

            if records.is_empty() {
                return Err(AlumniFinderError::NoRecords(
                    roster_path.display().to_string(),
                ));
            }

            // 2. Collaborators
            println!("[2/4] Loading synonyms and credentials...");
            let synonym_map = match synonyms.or_else(|| config.synonyms_path.clone()) {
                Some(path) => SynonymMap::from_path(&path)?,
                None => SynonymMap::default(),
            };
            let credentials_path = match credentials {
                Some(path) => path,
                None => config.resolved_credentials_path()?,
            };
            let credential_store = CredentialStore::load(&credentials_path)?;
            println!(
                "✔ {} institutions, {} credentials\n",
                synonym_map.len(),
                credential_store.credentials.len()
            );

            // 3. Search and score
            let pacing = if no_pacing {
                Pacing::Disabled
            } else {
                Pacing::Random {
                    min_secs: config.pacing_min_secs,
                    max_secs: config.pacing_max_secs,
                }
            };
            let options = FinderOptions {
                region: region.unwrap_or_else(|| config.region.clone()),
                target_position: job_position,
                target_geolocation: geolocation,
                pacing,
            };
            let finder = Finder::new(&synonym_map, options).verbose(cli.verbose);
            let workers = workers.unwrap_or(config.workers).max(1);

            println!("[3/4] Searching and scoring...{}", if workers > 1 {
                format!(" ({} workers)", workers)
            } else {
                String::new()
            });
            let report = if workers > 1 {
                run_partitioned(
                    &finder,
                    |_shard| SnapshotProvider::from_path(&snapshot),
                    &credential_store,
                    &records,
                    workers,
                )?
            } else {
                let mut provider = SnapshotProvider::from_path(&snapshot)?;
                let bar = ProgressBar::new(records.len() as u64);
                let report = finder.run(&mut provider, &credential_store, &records, Some(&bar))?;
                bar.finish();
                report
            };
            let with_candidates = report
                .groups
                .iter()
                .filter(|g| !g.results.is_empty())
                .count();
            println!(
                "✔ {} records processed, {} with candidates, {} structural failures\n",
                report.records_processed, with_candidates, report.structural_failures
            );

            // 4. Export
            println!("[4/4] Exporting...");
            let output_dir = output.unwrap_or_else(|| {
                roster_path
                    .parent()
                    .unwrap_or(std::path::Path::new("."))
                    .to_path_buf()
            });
            let written = export::export_report(&report, &format, &output_dir)?;
            println!("✔ Results written: {}", written.display());

            println!("\n✅ Run complete");
        }

        Commands::Inspect {
            roster: roster_path,
            start_row,
            end_row,
        } => {
            println!("🔎 alumni-finder - roster inspection\n");

            let range = roster::RowRange { start_row, end_row };
            let records = roster::read_roster(&roster_path, &range)?;

            let with_job = records
                .iter()
                .filter(|r| !r.work_title.trim().is_empty())
                .count();
            let education_slots: usize = records
                .iter()
                .map(|r| {
                    r.education
                        .iter()
                        .filter(|s| !s.school.trim().is_empty())
                        .count()
                })
                .sum();

            println!("Roster: {}", roster_path.display());
            println!("  records: {}", records.len());
            println!("  with a stored job title: {}", with_job);
            println!("  filled education slots: {}", education_slots);

            if cli.verbose {
                for record in &records {
                    println!(
                        "  row {}: {} {} - {}",
                        record.row_number,
                        record.first_name,
                        record.last_name,
                        if record.work_title.is_empty() {
                            "(no job on record)"
                        } else {
                            record.work_title.as_str()
                        }
                    );
                }
            }
        }

        Commands::Config {
            set_region,
            set_synonyms,
            show,
        } => {
            let mut config = config;
            let mut changed = false;

            if let Some(region) = set_region {
                config.region = region;
                changed = true;
            }
            if let Some(path) = set_synonyms {
                config.synonyms_path = Some(path);
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ Configuration saved");
            }

            if show || !changed {
                println!("Configuration:");
                println!("  region: {}", config.region);
                match &config.synonyms_path {
                    Some(path) => println!("  synonyms: {}", path.display()),
                    None => println!("  synonyms: (built-in)"),
                }
                println!(
                    "  credentials: {}",
                    config.resolved_credentials_path()?.display()
                );
                println!(
                    "  pacing: {}-{}s",
                    config.pacing_min_secs, config.pacing_max_secs
                );
                println!("  workers: {}", config.workers);
            }
        }

        Commands::Credentials { add, list, path } => {
            let store_path = match path {
                Some(path) => path,
                None => config.resolved_credentials_path()?,
            };
            let mut store = CredentialStore::load(&store_path)?;

            if add {
                let email: String = dialoguer::Input::new()
                    .with_prompt("Email")
                    .interact_text()
                    .map_err(|e| AlumniFinderError::Config(format!("prompt failed: {}", e)))?;
                let password = dialoguer::Password::new()
                    .with_prompt("Password")
                    .interact()
                    .map_err(|e| AlumniFinderError::Config(format!("prompt failed: {}", e)))?;
                store.push(Credential {
                    email,
                    password,
                    enabled: true,
                });
                store.save(&store_path)?;
                println!("✔ Credential stored: {}", store_path.display());
            }

            if list || !add {
                if store.is_empty() {
                    println!("No credentials stored ({})", store_path.display());
                } else {
                    println!("Credentials ({}):", store_path.display());
                    for credential in &store.credentials {
                        println!(
                            "  {}{}",
                            credential.email,
                            if credential.enabled { "" } else { " (disabled)" }
                        );
                    }
                }
            }
        }
    }

    Ok(())
}
