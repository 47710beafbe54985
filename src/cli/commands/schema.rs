use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::model::schema::load_schema;
use crate::ui::messages::header;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};

/// Handle the `schema` command
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Schema { path } = cmd {
        let path = expand_tilde(path);
        let (_, types) = load_schema(&path)?;

        header(path.display());
        let mut table = Table::new(vec![Column::new("field", 16), Column::new("type", 20)]);
        for (field, ty) in &types {
            table.add_row(vec![field.clone(), ty.to_string()]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
