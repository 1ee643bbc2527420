use crate::dns::{AnswerBuilder, RecordTypeMapper};
use hickory_proto::op::{Header, ResponseCode};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use microdns_application::use_cases::HandleDnsQueryUseCase;
use microdns_domain::DnsRequest;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Answers every query authoritatively from the static record table.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                warn!(error = %e, client = %request.src(), "Request without a usable question");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        // Table lookups ignore case, so the name is used as hickory hands it over.
        let name = request_info.query.original().name().clone();
        let record_type = RecordTypeMapper::from_hickory(request_info.query.query_type());
        let dns_request = DnsRequest::new(name.to_utf8(), record_type, request.src());

        let answer = self.use_case.execute(&dns_request);
        let answers = AnswerBuilder::build(&name, &answer);

        debug!(
            domain = %dns_request.domain,
            record_type = %record_type,
            answers = answers.len(),
            from_table = answer.from_table,
            "Sending response"
        );

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(true);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, client = %request.src(), "Failed to send response");
                ResponseInfo::from(header)
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    header.set_authoritative(true);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(header)
        }
    }
}
