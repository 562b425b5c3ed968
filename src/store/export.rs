use crate::errors::PlanError;
use crate::models::{MenuPlan, ShoppingItem};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 将规划结果写为 JSON (UTF-8, 缩进格式)
pub fn write_plan_json(plan: &MenuPlan, output_path: &Path) -> Result<(), PlanError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, plan)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    tracing::info!("规划结果已写入: {}", output_path.display());
    Ok(())
}

/// 导出购物清单到 CSV 文件 (表头 name,qty,unit)
pub fn export_shopping_list_csv(
    items: &[ShoppingItem],
    output_path: &Path,
) -> Result<(), PlanError> {
    use csv::Writer;

    let file = File::create(output_path)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(["name", "qty", "unit"])?;
    for item in items {
        let qty = item.qty.to_string();
        writer.write_record([item.name.as_str(), qty.as_str(), item.unit.as_str()])?;
    }

    writer.flush()?;
    tracing::info!("购物清单已导出 {} 行: {}", items.len(), output_path.display());
    Ok(())
}
