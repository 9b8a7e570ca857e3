use contracts::dashboards::brand_statistics::BrandProductCount;

/// How many brands the "top" views keep.
pub const TOP_BRANDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatisticsView {
    #[default]
    All,
    /// Five brands with the most products.
    Top5High,
    /// Five brands with the fewest products.
    Top5Low,
}

impl StatisticsView {
    pub const ALL: [StatisticsView; 3] = [
        StatisticsView::All,
        StatisticsView::Top5High,
        StatisticsView::Top5Low,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            StatisticsView::All => "all",
            StatisticsView::Top5High => "top5-high",
            StatisticsView::Top5Low => "top5-low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatisticsView::All => "All Brands",
            StatisticsView::Top5High => "Top 5 Brands (Highest Product Count)",
            StatisticsView::Top5Low => "Top 5 Brands (Lowest Product Count)",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|v| v.key() == key)
            .unwrap_or_default()
    }
}

/// Product counts per brand as delivered by the statistics endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandStatistics {
    rows: Vec<BrandProductCount>,
}

impl BrandStatistics {
    pub fn new(rows: Vec<BrandProductCount>) -> Self {
        Self { rows }
    }

    pub fn total_products(&self) -> u64 {
        self.rows.iter().map(|r| r.product_count).sum()
    }

    pub fn total_brands(&self) -> usize {
        self.rows.len()
    }

    /// Rows for the chart. Sorting is stable, so ties keep server order.
    pub fn view(&self, view: StatisticsView) -> Vec<BrandProductCount> {
        let mut rows = self.rows.clone();
        match view {
            StatisticsView::All => return rows,
            StatisticsView::Top5High => rows.sort_by(|a, b| b.product_count.cmp(&a.product_count)),
            StatisticsView::Top5Low => rows.sort_by(|a, b| a.product_count.cmp(&b.product_count)),
        }
        rows.truncate(TOP_BRANDS);
        rows
    }
}

/// Brand with the most products; the first one wins a tie.
pub fn highest(rows: &[BrandProductCount]) -> Option<&BrandProductCount> {
    rows.iter().fold(None, |best, row| match best {
        Some(b) if b.product_count >= row.product_count => Some(b),
        _ => Some(row),
    })
}

/// Brand with the fewest products; the first one wins a tie.
pub fn lowest(rows: &[BrandProductCount]) -> Option<&BrandProductCount> {
    rows.iter().fold(None, |best, row| match best {
        Some(b) if b.product_count <= row.product_count => Some(b),
        _ => Some(row),
    })
}
