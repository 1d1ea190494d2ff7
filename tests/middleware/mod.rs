mod route_guard;
