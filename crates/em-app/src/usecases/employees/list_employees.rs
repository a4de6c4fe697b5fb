use std::sync::Arc;

use tracing::{info, warn};

use em_core::employee::EmployeeRecord;
use em_core::listing::{paginate, sort_for_listing, Page, PageRequest};
use em_core::ports::{EmployeeTransportPort, TransportError};

/// Fetches every employee and serves the requested page.
///
/// The server has no paging; the full set is fetched on each call and
/// sliced locally.
pub struct ListEmployees {
    transport: Arc<dyn EmployeeTransportPort>,
}

impl ListEmployees {
    pub fn new(transport: Arc<dyn EmployeeTransportPort>) -> Self {
        Self { transport }
    }

    #[tracing::instrument(
        name = "usecase.list_employees.execute",
        skip(self),
        fields(page = request.page, page_size = request.page_size)
    )]
    pub async fn execute(&self, request: PageRequest) -> Result<Page<EmployeeRecord>, TransportError> {
        let records = self.fetch_sorted().await?;
        let page = paginate(&records, request);
        info!(total = page.total, shown = page.items.len(), "employee page ready");
        Ok(page)
    }

    /// Full listing in display order.
    pub async fn fetch_sorted(&self) -> Result<Vec<EmployeeRecord>, TransportError> {
        let records = self.transport.fetch_all().await.map_err(|err| {
            warn!(error = %err, "employee listing fetch failed");
            err
        })?;
        Ok(sort_for_listing(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{record, MockTransport};

    #[tokio::test]
    async fn test_listing_is_sorted_and_paged() {
        let mut transport = MockTransport::new();
        transport.expect_fetch_all().times(1).returning(|| {
            Ok((1..=12)
                .map(|n| record(&format!("{n:02}"), "Jane Doe"))
                .collect())
        });

        let page = ListEmployees::new(Arc::new(transport))
            .execute(PageRequest {
                page: 1,
                page_size: 5,
            })
            .await
            .unwrap();

        let ids: Vec<_> = page
            .items
            .iter()
            .map(|r| r.id.as_ref().unwrap().as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["07", "06", "05", "04", "03"]);
        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.items[0].dob, "1990-01-01");
    }

    #[tokio::test]
    async fn test_listing_failure_is_returned() {
        let mut transport = MockTransport::new();
        transport
            .expect_fetch_all()
            .times(1)
            .returning(|| Err(TransportError::Transport("connection refused".into())));

        let err = ListEmployees::new(Arc::new(transport))
            .execute(PageRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Transport(_)));
    }
}
