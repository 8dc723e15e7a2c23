// SPDX-License-Identifier: Apache-2.0

use console::style;
use repolikes_core::{RepositoryCard, ScreenPhase};
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::ScreenResult;

use super::Renderable;

fn render_card(w: &mut dyn Write, card: &RepositoryCard, ctx: &OutputContext) -> io::Result<()> {
    writeln!(w, "  {}", style(&card.title).bold())?;

    if !card.techs.is_empty() {
        let tags: Vec<String> = card
            .techs
            .iter()
            .map(|tech| style(format!(" {tech} ")).white().on_green().bold().to_string())
            .collect();
        writeln!(w, "  {}", tags.join(" "))?;
    }

    write!(w, "  {}", card.likes_label)?;
    if ctx.verbose {
        write!(w, "  {}", style(&card.likes_test_id).dim())?;
    }
    writeln!(w)?;

    write!(w, "  {}", style(format!("[ {} ]", card.like_button_label)).magenta())?;
    if ctx.verbose {
        write!(w, "  {}", style(&card.like_button_test_id).dim())?;
    }
    writeln!(w, "  {}", style(format!("id: {}", card.id)).dim())?;
    writeln!(w)
}

impl Renderable for ScreenResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        writeln!(w)?;
        if self.repositories.is_empty() {
            let note = match self.phase {
                ScreenPhase::Loaded => "Nenhum repositório cadastrado.",
                ScreenPhase::Empty => "Nenhum repositório carregado.",
            };
            writeln!(w, "  {}", style(note).dim())?;
            writeln!(w)?;
            return Ok(());
        }

        for card in &self.repositories {
            render_card(w, card, ctx)?;
        }
        Ok(())
    }
}
