use crate::dns::{RecordTypeMapper, ResponseBuilder};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use restdns_application::use_cases::HandleDnsQueryUseCase;
use restdns_domain::DnsQuery;
use std::sync::Arc;
use tracing::{debug, error};

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
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        // The lowered query is only used for matching; the reply echoes the
        // name exactly as the client sent it. Labels with special bytes keep
        // their `\` escapes, and the backend receives that escaped text.
        let original = request_info.query.original();
        let query = DnsQuery::new(
            original.name().to_ascii(),
            RecordTypeMapper::from_hickory(original.query_type()),
        );

        debug!(
            domain = %query.name,
            record_type = %query.record_type,
            client = %request.src().ip(),
            "DNS query received"
        );

        let outcome = self.use_case.execute(&query).await;
        let message = ResponseBuilder::build(request.header(), original, &outcome);

        debug!(
            domain = %query.name,
            status = outcome.response_status(),
            answers = message.answers().len(),
            "Sending response"
        );

        let builder = MessageResponseBuilder::from_message_request(request);
        let response = builder.build(
            *message.header(),
            message.answers().iter(),
            &[] as &[Record],
            &[] as &[Record],
            &[] as &[Record],
        );

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, domain = %query.name, "Failed to send response");
                write_failure(request)
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
    let response = builder.error_msg(request.header(), code);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            write_failure(request)
        }
    }
}

/// A reply that could not be written is reported to the server loop as a
/// server failure rather than as whatever the reply would have said.
fn write_failure(request: &Request) -> ResponseInfo {
    let mut header = *request.header();
    header.set_response_code(ResponseCode::ServFail);
    ResponseInfo::from(header)
}
