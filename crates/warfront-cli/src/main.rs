//! Terminal front-end for Warfront.
//!
//! Owns every prompt and all rendering; the core crate never prints. The
//! session runs the classic sequential loop: register territories, reveal
//! missions, then attack until a mission holds.

use std::io::{self, BufRead, Write};

use warfront_core::{
    CombatOutcome, CombatReport, GameSettings, GameState, SessionRandom, Territory,
};

fn main() {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut random = SessionRandom::new();

    banner("WELCOME TO WARFRONT");

    let territory_count = prompt_count(&mut input, "Number of territories to register: ");
    let player_count = prompt_count(&mut input, "Number of players: ").min(u8::MAX as usize);

    let settings = GameSettings::new(territory_count, player_count as u8);
    let mut game = match GameState::new(settings) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Cannot start session: {}", err);
            std::process::exit(1);
        }
    };

    register_territories(&mut input, &mut game);

    let names: Vec<String> = (1..=player_count)
        .map(|i| format!("Player {}", i))
        .collect();
    if let Err(err) = game.start(names, &mut random) {
        eprintln!("Cannot start game: {}", err);
        std::process::exit(1);
    }

    banner("MISSION ASSIGNMENT");
    for player in &game.players {
        println!("{}: {}", player.name, player.mission_text());
    }

    run_menu_loop(&mut input, &mut game, &mut random);
}

/// Sequential menu loop; checks for a winner after every resolved attack.
fn run_menu_loop(input: &mut impl BufRead, game: &mut GameState, random: &mut SessionRandom) {
    loop {
        if game.turn > 0 {
            if let Some(winner) = game.check_winner() {
                let player = game.get_player(winner);
                banner("WE HAVE A WINNER");
                match player {
                    Some(player) => {
                        println!("{} completed their mission: {}", player.name, player.mission_text())
                    }
                    None => println!("Player {} completed their mission", winner + 1),
                }
                return;
            }
        }

        print_menu();
        match prompt_line(input).trim() {
            "1" => print_board(game),
            "2" => attack_flow(input, game, random),
            "3" => print_mission_status(game),
            "4" => {
                println!("Thanks for playing!");
                return;
            }
            _ => println!("Invalid option, try again."),
        }
    }
}

fn attack_flow(input: &mut impl BufRead, game: &mut GameState, random: &mut SessionRandom) {
    if game.board.len() < 2 {
        println!("At least 2 territories are needed to attack.");
        return;
    }

    print_board(game);
    let attacker = prompt_territory_id(input, game, "Attacking territory ID: ");
    let defender = prompt_territory_id(input, game, "Defending territory ID: ");

    match game.attack(attacker, defender, random) {
        Ok(report) => narrate(game, defender, &report),
        Err(err) => println!("Attack refused: {}", err),
    }
}

fn narrate(game: &GameState, defender: usize, report: &CombatReport) {
    banner("ATTACK SIMULATION");
    println!(
        "Attack die: {}  |  Defense die: {}",
        report.attack_die, report.defense_die
    );
    match report.outcome {
        CombatOutcome::Conquest { troops_transferred } => {
            let name = game
                .board
                .get(defender)
                .map(|t| t.name.as_str())
                .unwrap_or("the territory");
            println!("CONQUEST! {} changes hands with {} troops.", name, troops_transferred);
        }
        CombatOutcome::Repulsion { troops_lost } => {
            if troops_lost > 0 {
                println!("REPELLED! The attacker loses {} troop.", troops_lost);
            } else {
                println!("REPELLED! The attacker had no troops to lose.");
            }
        }
        CombatOutcome::Stalemate => println!("STALEMATE! No territory changes control."),
    }
}

fn register_territories(input: &mut impl BufRead, game: &mut GameState) {
    banner("TERRITORY REGISTRATION");
    let total = game.settings.territory_count;
    for i in 1..=total {
        println!("--- Territory {} of {} ---", i, total);
        let name = prompt_text(input, "Territory name: ");
        let owner = prompt_text(input, "Army color: ");
        let troops = prompt_count(input, "Troop count: ") as u32;
        if let Err(err) = game.register_territory(Territory::new(name, owner, troops)) {
            // Bounded by the settings; only a phase bug can trip this.
            println!("Registration failed: {}", err);
        }
    }
}

fn print_board(game: &GameState) {
    banner("REGISTERED TERRITORIES");
    for (id, territory) in game.board.territories().iter().enumerate() {
        println!(
            "[{}] {:<20} color: {:<10} troops: {}",
            id, territory.name, territory.owner, territory.troops
        );
    }
}

fn print_mission_status(game: &GameState) {
    banner("MISSION STATUS");
    for player in &game.players {
        println!("{}: {}", player.name, player.mission_text());
    }
}

fn print_menu() {
    banner("MAIN MENU");
    println!("1. Show territories");
    println!("2. Attack");
    println!("3. Mission status");
    println!("4. Quit");
    print!("Choose an option: ");
    flush();
}

fn banner(title: &str) {
    println!();
    println!("==================================================");
    println!("  {}", title);
    println!("==================================================");
}

fn prompt_line(input: &mut impl BufRead) -> String {
    let mut line = String::new();
    match input.read_line(&mut line) {
        // EOF: treat as quit so piped sessions terminate cleanly.
        Ok(0) => {
            println!();
            std::process::exit(0);
        }
        Ok(_) => line,
        Err(err) => {
            eprintln!("Failed to read input: {}", err);
            std::process::exit(1);
        }
    }
}

fn prompt_text(input: &mut impl BufRead, message: &str) -> String {
    loop {
        print!("{}", message);
        flush();
        let line = prompt_line(input);
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
        println!("A value is required.");
    }
}

/// Prompt until a strictly positive number is entered.
fn prompt_count(input: &mut impl BufRead, message: &str) -> usize {
    loop {
        print!("{}", message);
        flush();
        match prompt_line(input).trim().parse::<usize>() {
            Ok(value) if value > 0 => return value,
            _ => println!("Enter a number greater than zero."),
        }
    }
}

/// Prompt until a valid territory ID is entered.
fn prompt_territory_id(input: &mut impl BufRead, game: &GameState, message: &str) -> usize {
    loop {
        print!("{}", message);
        flush();
        match prompt_line(input).trim().parse::<usize>() {
            Ok(id) if id < game.board.len() => return id,
            _ => println!(
                "Invalid selection, enter an ID between 0 and {}.",
                game.board.len() - 1
            ),
        }
    }
}

fn flush() {
    let _ = io::stdout().flush();
}
