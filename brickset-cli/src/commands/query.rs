use brickset_catalog::LegoSetRepository;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn run_count_tag(repo: &LegoSetRepository, tag: &str) {
    let count = repo.count_with_tag(tag);
    log::info!(
        "{} set(s) tagged {}",
        count.if_supports_color(Stdout, |t| t.bold()),
        tag.if_supports_color(Stdout, |t| t.cyan()),
    );
}

/// List names, optionally restricted to sets below a piece limit.
pub(crate) fn run_names(repo: &LegoSetRepository, under: Option<u32>) {
    let names = match under {
        Some(limit) => repo.names_under_piece_limit(limit),
        None => repo.names_sorted(),
    };
    if names.is_empty() {
        log::warn!("No sets matched");
        return;
    }
    for name in names {
        log::info!("{}", name);
    }
}

pub(crate) fn run_packaging(repo: &LegoSetRepository) {
    for packaging in repo.packaging_types() {
        log::info!("{}", packaging);
    }
}

pub(crate) fn run_themes(repo: &LegoSetRepository) {
    for theme in repo.themes() {
        log::info!("{}", theme);
    }
}

/// Piece total for one theme, or a per-theme table when no theme is given.
pub(crate) fn run_pieces(repo: &LegoSetRepository, theme: Option<&str>) {
    match theme {
        Some(theme) => {
            log::info!(
                "{}: {} pieces",
                theme.if_supports_color(Stdout, |t| t.cyan()),
                repo.sum_pieces(theme),
            );
        }
        None => {
            let totals = repo.pieces_by_theme();
            let width = totals.keys().map(|t| t.chars().count()).max().unwrap_or(0);
            log::info!(
                "{}",
                "Pieces by theme".if_supports_color(Stdout, |t| t.bold()),
            );
            for (theme, pieces) in totals {
                log::info!("  {:<width$}  {:>8}", theme, pieces, width = width);
            }
        }
    }
}

pub(crate) fn run_largest(repo: &LegoSetRepository, theme: &str) -> Result<(), CliError> {
    let set = repo.largest_in_theme(theme)?;
    log::info!("{}", set);
    Ok(())
}

pub(crate) fn run_show(repo: &LegoSetRepository, number: &str) -> Result<(), CliError> {
    let set = repo
        .find_by_number(number)
        .ok_or_else(|| CliError::not_found(format!("no set with number {}", number)))?;

    log::info!(
        "{} {}",
        set.number.if_supports_color(Stdout, |t| t.dimmed()),
        set.name.if_supports_color(Stdout, |t| t.bold()),
    );
    if let Some(year) = set.year {
        log::info!("  Year:       {}", year);
    }
    if let Some(theme) = &set.theme {
        log::info!("  Theme:      {}", theme);
    }
    if let Some(subtheme) = &set.subtheme {
        log::info!("  Subtheme:   {}", subtheme);
    }
    if set.has_piece_count() {
        log::info!("  Pieces:     {}", set.pieces);
    } else {
        log::info!(
            "  Pieces:     {}",
            "unknown".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("  Packaging:  {}", set.packaging_type);
    for minifig in &set.minifigs {
        log::info!(
            "  Minifig:    {} x{}",
            minifig.name.as_deref().unwrap_or("(unnamed)"),
            minifig.count,
        );
    }
    if let Some(dims) = &set.dimensions {
        if let (Some(h), Some(w), Some(d)) = (dims.height, dims.width, dims.depth) {
            log::info!("  Box:        {} x {} x {} cm", h, w, d);
        }
        if let Some(weight) = dims.weight {
            log::info!("  Weight:     {} kg", weight);
        }
    }
    if let Some(tags) = set.tags.as_ref().filter(|t| !t.is_empty()) {
        let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
        log::info!("  Tags:       {}", tags.join(", "));
    }
    Ok(())
}
