use classroom_canvas_interface::CanvasService;
use classroom_ghapi_interface::ApiService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub canvas_service: &'a (dyn CanvasService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use classroom_canvas_interface::MockCanvasService;
    use classroom_ghapi_interface::MockApiService;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub core_module: CoreModule,
        pub api_service: MockApiService,
        pub canvas_service: MockCanvasService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
                canvas_service: MockCanvasService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                core_module: &self.core_module,
                api_service: &self.api_service,
                canvas_service: &self.canvas_service,
            }
        }
    }
}
