use super::requested_method;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse},
    Error,
};
use std::rc::Rc;

pub struct MethodOverrideMiddleware<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for MethodOverrideMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        if let Some(method) = requested_method(&req) {
            tracing::debug!("{} {} overridden to {}", req.method(), req.path(), method);
            req.head_mut().method = method;
        }

        self.service.call(req)
    }
}
