use contracts::dashboards::sales_overview::dto::SaleRecordRow;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

/// Detail grid of the raw filtered records. Columns mirror the source
/// dataset; the price column shows the formatted string.
#[component]
pub fn RecordsGrid(records: Vec<SaleRecordRow>) -> impl IntoView {
    let total = records.len();

    view! {
        <div class="records-grid">
            <h2 class="records-grid__title">
                {format!("Dados detalhados ({} registros)", total)}
            </h2>
            <div class="records-grid__scroll">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Data da Compra"</TableHeaderCell>
                            <TableHeaderCell>"Preço"</TableHeaderCell>
                            <TableHeaderCell>"Local da compra"</TableHeaderCell>
                            <TableHeaderCell>"Região"</TableHeaderCell>
                            <TableHeaderCell>"Categoria do Produto"</TableHeaderCell>
                            <TableHeaderCell>"Vendedor"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {records
                            .into_iter()
                            .map(|record| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{record.purchase_date}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{record.price_formatted}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{record.state}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{record.region}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{record.category}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{record.seller}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
