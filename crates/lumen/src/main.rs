use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use lumen_core::{Category, ConfigManager, Console, Target};

/// Lighting console core with cue composition and live playback.
#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "Lumen lighting console")]
struct Args {
    /// Show file to load on startup
    #[arg(long)]
    show: Option<PathBuf>,

    /// Configuration file path (default: config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Patch a small demo rig and record a demo cue list
    #[arg(long, default_value = "false")]
    demo: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = ConfigManager::new(args.config);
    let settings = config.load().map_err(|e| anyhow::anyhow!("{e}"))?;
    log::info!("config loaded, autosave={}", settings.enable_autosave);
    let mut console = Console::with_config(config);

    if let Some(path) = &args.show {
        console
            .load_show(path)
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        println!("Loaded show \"{}\"", console.show_name());
    } else if args.demo {
        patch_demo_rig(&mut console).map_err(|e| anyhow::anyhow!("{e}"))?;
        println!("Patched demo rig with {} fixtures", console.fixtures().len());
    }

    prompt_loop(&mut console)
}

fn patch_demo_rig(console: &mut Console) -> Result<(), lumen_core::ConsoleError> {
    let ids = |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };

    console.new_show("Demo".to_string());
    console.record_fixture(&ids(&["1"]), "generic-rgbw-par", 1, 1)?;
    console.record_fixture(&ids(&["2"]), "generic-rgbw-par", 1, 9)?;
    console.record_fixture(&ids(&["3"]), "generic-spot-60w", 1, 18)?;
    console.record_fixture(&ids(&["4"]), "generic-spot-60w", 1, 28)?;
    console.record_group(&ids(&["1"]))?;
    console.add_group_fixtures("1", &ids(&["1", "2"]))?;
    console.record_group(&ids(&["2"]))?;
    console.add_group_fixtures("2", &ids(&["3", "4"]))?;

    console.record_intensity(&ids(&["1"]), 0.0)?;
    console.record_intensity(&ids(&["2"]), 60.0)?;
    console.record_intensity(&ids(&["3"]), 100.0)?;
    console.record_position(&ids(&["1"]), 0.0, 30.0)?;
    console.record_position(&ids(&["2"]), -45.0, 15.0)?;
    console.record_color(&ids(&["1"]), 0.0, 100.0, 100.0)?;
    console.record_color(&ids(&["2"]), 220.0, 80.0, 100.0)?;

    console.record_cue_list(&ids(&["1"]))?;
    console.record_cue(&ids(&["1", "2", "3"]), "1")?;

    // Cue 1: warm wash on the PARs, spots parked dark at position 1.
    console.set_cue_entry("1", Category::Intensities, Target::Group("1".to_string()), "2")?;
    console.set_cue_entry("1", Category::Colors, Target::Group("1".to_string()), "1")?;
    console.set_cue_entry("1", Category::Intensities, Target::Group("2".to_string()), "1")?;
    console.set_cue_entry("1", Category::Positions, Target::Group("2".to_string()), "1")?;

    // Cue 2: spots up in blue at position 2.
    console.set_cue_entry("2", Category::Intensities, Target::Group("2".to_string()), "3")?;
    console.set_cue_entry("2", Category::Colors, Target::Group("2".to_string()), "2")?;
    console.set_cue_entry("2", Category::Positions, Target::Group("2".to_string()), "2")?;

    // Cue 3: everything out.
    console.set_cue_entry("3", Category::Intensities, Target::Group("1".to_string()), "1")?;
    console.set_cue_entry("3", Category::Intensities, Target::Group("2".to_string()), "1")?;

    console.set_cue_list_move_while_dark("1", true)?;
    Ok(())
}

fn prompt_loop(console: &mut Console) -> Result<()> {
    println!("Commands: go <list> <cue> | next <list> | prev <list> | release <list>");
    println!("          stage | lists | cues <list> | save | quit");

    let stdin = io::stdin();
    loop {
        print!("lumen> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();

        let result = match parts.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["go", list, cue] => console.go_to_cue(list, cue),
            ["next", list] => console.next_cue(list).map(|cue| println!("cue {}", cue)),
            ["prev", list] => console.previous_cue(list).map(|cue| println!("cue {}", cue)),
            ["release", list] => {
                console.release(list);
                Ok(())
            }
            ["stage"] => {
                for (fixture, state) in console.stage_output() {
                    let dimmer = state
                        .intensity
                        .map(|i| format!("{:.0}%", i.dimmer))
                        .unwrap_or_else(|| "-".to_string());
                    let position = state
                        .position
                        .map(|p| format!("pan {:.0} tilt {:.0}", p.pan, p.tilt))
                        .unwrap_or_else(|| "-".to_string());
                    println!("  {}: dimmer {} position {}", fixture, dimmer, position);
                }
                Ok(())
            }
            ["lists"] => {
                for (id, label) in console.list(lumen_core::Kind::CueList) {
                    let current = console
                        .playback()
                        .current_cue(&id)
                        .unwrap_or("-");
                    println!("  {} {} (current cue: {})", id, label, current);
                }
                Ok(())
            }
            ["cues", list] => {
                match console.cue_lists().get(list) {
                    Some(cue_list) => {
                        for cue_id in &cue_list.cues {
                            println!("  {}", cue_id);
                        }
                        Ok(())
                    }
                    None => {
                        println!("unknown cue list: {}", list);
                        Ok(())
                    }
                }
            }
            ["save"] => console.save_show().map(|path| {
                println!("saved to {}", path.display());
            }),
            _ => {
                println!("unrecognized command");
                continue;
            }
        };

        if let Err(e) = result {
            println!("{}", e);
        }
    }

    Ok(())
}
