//! Output formatting for CLI

use crate::{
    geocache::Coin,
    session::{GameSession, VisibleCache},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Comma separated coin list, bottom of the stack first
pub fn format_coins(coins: &[Coin]) -> String {
    if coins.is_empty() {
        return "(empty)".to_string();
    }
    coins
        .iter()
        .map(Coin::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line per visible cache
pub fn print_caches(caches: &[VisibleCache]) {
    if caches.is_empty() {
        println!("  No caches in view.");
        return;
    }
    for visible in caches {
        let (i, j) = visible.cell.coords();
        println!(
            "  cache {i:>8}, {j:>9}  [{} coins]  sw={} ne={}",
            visible.cache.len(),
            visible.bounds.south_west,
            visible.bounds.north_east
        );
        println!("      {}", format_coins(visible.cache.coins()));
    }
}

/// Player position, cell, holdings and store size
pub fn print_status(session: &GameSession) {
    let location = session.location();
    print_kv("Location", &location.to_string());
    if let Ok((i, j)) = session.board().coords_for_point(location) {
        print_kv("Cell", &format!("({i}, {j})"));
    }
    print_kv("Coins held", &session.coin_count().to_string());
    print_kv("Holdings", &format_coins(session.holdings()));
    print_kv("Steps taken", &(session.history().len() - 1).to_string());
    print_kv("Caches known", &session.store().len().to_string());
}
